use crate::output::print_json;
use anyhow::Context;
use strengths_core::identify_gaps;
use strengths_core::team::load_team;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (profile, members) = load_team(root).context("failed to load team")?;
    let gaps = identify_gaps(&members, &profile.top_strengths);

    if json {
        return print_json(&gaps);
    }

    if gaps.weak_domains.is_empty() {
        println!("No under-represented domains.");
    } else {
        let weak: Vec<&str> = gaps.weak_domains.iter().map(|d| d.as_str()).collect();
        println!("Under-represented domains: {}", weak.join(", "));
        for rec in &gaps.recommendations {
            println!("  - {rec}");
        }
    }

    println!();
    if gaps.missing_strengths.is_empty() {
        println!("Every strength is covered by someone on the team.");
    } else {
        println!("Nobody on the team has:");
        for s in &gaps.missing_strengths {
            println!("  {s}");
        }
    }
    Ok(())
}
