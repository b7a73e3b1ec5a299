use super::{canonical_strengths, require_init};
use crate::output::print_json;
use anyhow::Context;
use strengths_core::catalog::domain_of;
use strengths_core::team::ManagerProfile;
use strengths_core::StrengthsError;
use std::path::Path;

// ---------------------------------------------------------------------------
// onboard
// ---------------------------------------------------------------------------

pub fn onboard(root: &Path, name: &str, strengths: Vec<String>, json: bool) -> anyhow::Result<()> {
    require_init(root)?;
    let strengths = canonical_strengths(strengths);

    let profile = match ManagerProfile::onboard(root, name, strengths) {
        Ok(p) => p,
        Err(StrengthsError::InvalidSelection(errors)) => {
            for e in &errors {
                eprintln!("  - {e}");
            }
            anyhow::bail!("onboarding rejected: {} problem(s) with the selection", errors.len());
        }
        Err(e) => return Err(e).context("failed to save profile"),
    };

    if json {
        return print_json(&profile);
    }
    println!(
        "Welcome, {}. Your top 5: {}",
        profile.name,
        profile.top_strengths.join(", ")
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

pub fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let profile = ManagerProfile::load(root).context("failed to load profile")?;

    if json {
        return print_json(&profile);
    }

    println!("{}", profile.name);
    println!("Onboarded: {}", profile.onboarded_at.format("%Y-%m-%d"));
    for (i, s) in profile.top_strengths.iter().enumerate() {
        println!("  {}. {:<18} {}", i + 1, s, domain_of(s));
    }
    Ok(())
}
