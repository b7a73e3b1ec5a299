use crate::output::{bar, print_json, print_table};
use anyhow::Context;
use strengths_core::team::load_team;
use strengths_core::team_analytics;
use std::path::Path;

/// Team dashboard: domain balance, most common strengths, and who holds what.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (profile, members) = load_team(root).context("failed to load team")?;
    let analytics = team_analytics(&members, &profile.top_strengths);

    if json {
        return print_json(&analytics);
    }

    println!("Team of {} (including you)", analytics.total_members);
    println!();
    println!("Domain balance");
    for (domain, count) in analytics.domain_balance.iter() {
        println!("  {:<22} {:>3}  {}", domain.as_str(), count, bar(count));
    }
    if let Some(dominant) = analytics.domain_balance.dominant() {
        println!("  Leans toward {dominant}: {}", dominant.description());
    }

    println!();
    println!("Top strengths");
    let rows = analytics
        .top_strengths
        .iter()
        .map(|s| vec![s.strength.clone(), s.count.to_string()])
        .collect();
    print_table(&["STRENGTH", "COUNT"], rows);

    println!();
    println!("Who holds what");
    let rows = analytics
        .strength_distribution
        .iter()
        .map(|d| vec![d.strength.clone(), d.holders.join(", ")])
        .collect();
    print_table(&["STRENGTH", "HOLDERS"], rows);
    Ok(())
}
