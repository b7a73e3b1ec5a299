use crate::catalog;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of strengths a profile selection must contain.
pub const REQUIRED_SELECTION: usize = 5;

pub const MSG_WRONG_COUNT: &str = "You must select exactly 5 strengths";
pub const MSG_NOT_UNIQUE: &str = "Strengths must be unique";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check a top-5 selection. Every rule runs so the caller gets all problems
/// in one pass; failures are reported as messages, never as errors.
pub fn validate_selection<S: AsRef<str>>(strengths: &[S]) -> SelectionValidation {
    let mut errors = Vec::new();

    if strengths.len() != REQUIRED_SELECTION {
        errors.push(MSG_WRONG_COUNT.to_string());
    }

    let invalid = catalog::unknown_names(strengths);
    if !invalid.is_empty() {
        errors.push(format!("Invalid strengths: {}", invalid.join(", ")));
    }

    let distinct: HashSet<&str> = strengths.iter().map(AsRef::as_ref).collect();
    if distinct.len() != strengths.len() {
        errors.push(MSG_NOT_UNIQUE.to_string());
    }

    SelectionValidation {
        valid: errors.is_empty(),
        errors,
    }
}
