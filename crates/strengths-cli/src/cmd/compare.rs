use crate::output::print_json;
use anyhow::Context;
use serde_json::json;
use strengths_core::coaching::collaboration_prompt;
use strengths_core::team::{ManagerProfile, TeamMember};
use strengths_core::types::{is_manager_alias, MANAGER_LABEL};
use strengths_core::complementary;
use std::path::Path;

/// Resolve "you"/"me" to the manager, anything else to a team member.
fn resolve(root: &Path, key: &str) -> anyhow::Result<(String, Vec<String>)> {
    let key = key.trim();
    if is_manager_alias(key) {
        let profile = ManagerProfile::load(root).context("failed to load profile")?;
        return Ok((MANAGER_LABEL.to_string(), profile.top_strengths));
    }
    let member =
        TeamMember::find(root, key).with_context(|| format!("failed to resolve '{key}'"))?;
    Ok((member.name, member.top_strengths))
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

pub fn run(root: &Path, first: &str, second: &str, prompt: bool, json: bool) -> anyhow::Result<()> {
    let (label1, strengths1) = resolve(root, first)?;
    let (label2, strengths2) = resolve(root, second)?;
    let result = complementary(&strengths1, &strengths2);

    if prompt {
        let text = collaboration_prompt(&label1, &strengths1, &label2, &strengths2, &result);
        if json {
            return print_json(&json!({ "prompt": text }));
        }
        println!("{text}");
        return Ok(());
    }

    if json {
        return print_json(&json!({
            "first": label1,
            "second": label2,
            "result": result,
        }));
    }

    println!("{label1} and {label2}");
    println!("  Shared:          {}", list(&result.shared));
    println!("  Only {label1}: {}", list(&result.unique1));
    println!("  Only {label2}: {}", list(&result.unique2));
    if result.domain_complement {
        println!("  Their dominant domains complement each other.");
    } else {
        println!("  No domain complement.");
    }
    Ok(())
}
