use super::canonical_strengths;
use crate::output::print_json;
use serde_json::json;
use strengths_core::catalog::domain_of;
use strengths_core::{sort_by_domain, validate_selection};

/// Check a top-5 selection. Exits non-zero when the selection is invalid.
pub fn validate(strengths: Vec<String>, json: bool) -> anyhow::Result<()> {
    let strengths = canonical_strengths(strengths);
    let result = validate_selection(&strengths);

    if json {
        print_json(&result)?;
    } else if result.valid {
        println!("Valid selection: {}", strengths.join(", "));
    } else {
        for e in &result.errors {
            println!("  - {e}");
        }
    }

    if !result.valid {
        anyhow::bail!("selection is invalid");
    }
    Ok(())
}

/// Print strengths grouped by domain, alphabetical within each domain.
pub fn sort(strengths: Vec<String>, json: bool) -> anyhow::Result<()> {
    let sorted = sort_by_domain(&canonical_strengths(strengths));

    if json {
        let entries: Vec<serde_json::Value> = sorted
            .iter()
            .map(|s| json!({ "name": s, "domain": domain_of(s) }))
            .collect();
        return print_json(&entries);
    }
    for s in &sorted {
        println!("{:<18} {}", s, domain_of(s));
    }
    Ok(())
}
