use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StrengthDomain
// ---------------------------------------------------------------------------

/// One of the four groupings that partition the 34 strength themes.
///
/// Variant order is the canonical display order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthDomain {
    #[serde(rename = "Executing")]
    Executing,
    #[serde(rename = "Influencing")]
    Influencing,
    #[serde(rename = "Relationship Building")]
    RelationshipBuilding,
    #[serde(rename = "Strategic Thinking")]
    StrategicThinking,
}

/// Label used for the manager wherever a person's name is shown.
pub const MANAGER_LABEL: &str = "You";

/// Words that refer to the manager on the command line. Member names may not
/// use them (compared case-insensitively).
pub const MANAGER_ALIASES: &[&str] = &["you", "me"];

pub fn is_manager_alias(name: &str) -> bool {
    let name = name.trim();
    MANAGER_ALIASES.iter().any(|a| a.eq_ignore_ascii_case(name))
}

impl StrengthDomain {
    pub fn all() -> &'static [StrengthDomain] {
        &[
            StrengthDomain::Executing,
            StrengthDomain::Influencing,
            StrengthDomain::RelationshipBuilding,
            StrengthDomain::StrategicThinking,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthDomain::Executing => "Executing",
            StrengthDomain::Influencing => "Influencing",
            StrengthDomain::RelationshipBuilding => "Relationship Building",
            StrengthDomain::StrategicThinking => "Strategic Thinking",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StrengthDomain::Executing => "#7B2481",
            StrengthDomain::Influencing => "#E97200",
            StrengthDomain::RelationshipBuilding => "#0070CD",
            StrengthDomain::StrategicThinking => "#00945F",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrengthDomain::Executing => "Knowing how to make things happen.",
            StrengthDomain::Influencing => {
                "Taking charge, speaking up, and making sure the team is heard."
            }
            StrengthDomain::RelationshipBuilding => {
                "Holding the team together and making it greater than the sum of its parts."
            }
            StrengthDomain::StrategicThinking => {
                "Absorbing and analyzing information to make better decisions."
            }
        }
    }
}

impl fmt::Display for StrengthDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrengthDomain {
    type Err = crate::error::StrengthsError;

    /// Accepts the canonical label as well as snake_case / kebab-case forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "executing" => Ok(StrengthDomain::Executing),
            "influencing" => Ok(StrengthDomain::Influencing),
            "relationship building" | "relationship" => Ok(StrengthDomain::RelationshipBuilding),
            "strategic thinking" | "strategic" => Ok(StrengthDomain::StrategicThinking),
            _ => Err(crate::error::StrengthsError::InvalidDomain(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
