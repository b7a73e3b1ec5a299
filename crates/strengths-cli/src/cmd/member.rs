use super::{canonical_strengths, require_init};
use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use strengths_core::catalog::domain_of;
use strengths_core::team::TeamMember;
use strengths_core::StrengthsError;
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum MemberSubcommand {
    /// Add a team member with their top 5 strengths
    Add {
        /// Member name
        name: String,
        /// Exactly five strength names (space or comma separated)
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        strengths: Vec<String>,
    },

    /// List team members
    List,

    /// Show one member (name, id, or id prefix)
    Show { key: String },

    /// Replace a member's top 5 strengths
    Update {
        key: String,
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        strengths: Vec<String>,
    },

    /// Rename a member
    Rename { key: String, new_name: String },

    /// Remove a member from the team
    Remove { key: String },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: MemberSubcommand, json: bool) -> anyhow::Result<()> {
    require_init(root)?;
    match subcmd {
        MemberSubcommand::Add { name, strengths } => add(root, &name, strengths, json),
        MemberSubcommand::List => list(root, json),
        MemberSubcommand::Show { key } => show(root, &key, json),
        MemberSubcommand::Update { key, strengths } => update(root, &key, strengths, json),
        MemberSubcommand::Rename { key, new_name } => rename(root, &key, &new_name, json),
        MemberSubcommand::Remove { key } => remove(root, &key, json),
    }
}

/// Turn a rejected selection into a readable error, listing each problem.
fn selection_error(e: StrengthsError) -> anyhow::Error {
    match e {
        StrengthsError::InvalidSelection(errors) => {
            for msg in &errors {
                eprintln!("  - {msg}");
            }
            anyhow::anyhow!("{} problem(s) with the selection", errors.len())
        }
        other => anyhow::Error::new(other),
    }
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

fn add(root: &Path, name: &str, strengths: Vec<String>, json: bool) -> anyhow::Result<()> {
    let member = TeamMember::create(root, name, canonical_strengths(strengths))
        .map_err(selection_error)
        .context("failed to add team member")?;

    if json {
        return print_json(&member);
    }
    println!("Added {} ({})", member.name, member.id);
    Ok(())
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let members = TeamMember::list(root).context("failed to list team members")?;

    if json {
        return print_json(&members);
    }
    if members.is_empty() {
        println!("No team members yet. Add one with: strengths member add <name> <five strengths>");
        return Ok(());
    }

    let rows = members
        .iter()
        .map(|m| {
            vec![
                m.id.chars().take(8).collect(),
                m.name.clone(),
                m.top_strengths.join(", "),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "TOP 5"], rows);
    Ok(())
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, key: &str, json: bool) -> anyhow::Result<()> {
    let member = TeamMember::find(root, key).context("failed to find team member")?;

    if json {
        return print_json(&member);
    }
    println!("{} ({})", member.name, member.id);
    println!("Added: {}", member.created_at.format("%Y-%m-%d"));
    for (i, s) in member.top_strengths.iter().enumerate() {
        println!("  {}. {:<18} {}", i + 1, s, domain_of(s));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// update / rename
// ---------------------------------------------------------------------------

fn update(root: &Path, key: &str, strengths: Vec<String>, json: bool) -> anyhow::Result<()> {
    let mut member = TeamMember::find(root, key).context("failed to find team member")?;
    member
        .update_strengths(canonical_strengths(strengths))
        .map_err(selection_error)
        .context("failed to update strengths")?;
    member.save(root).context("failed to save team member")?;

    if json {
        return print_json(&member);
    }
    println!(
        "Updated {}: {}",
        member.name,
        member.top_strengths.join(", ")
    );
    Ok(())
}

fn rename(root: &Path, key: &str, new_name: &str, json: bool) -> anyhow::Result<()> {
    let mut member = TeamMember::find(root, key).context("failed to find team member")?;
    let old = member.name.clone();
    member
        .rename(root, new_name)
        .context("failed to rename team member")?;

    if json {
        return print_json(&member);
    }
    println!("Renamed {old} to {}", member.name);
    Ok(())
}

// ---------------------------------------------------------------------------
// remove
// ---------------------------------------------------------------------------

fn remove(root: &Path, key: &str, json: bool) -> anyhow::Result<()> {
    let member = TeamMember::find(root, key).context("failed to find team member")?;
    TeamMember::remove(root, &member.id).context("failed to remove team member")?;

    if json {
        return print_json(&serde_json::json!({
            "removed": member.id,
            "name": member.name,
        }));
    }
    println!("Removed {}", member.name);
    Ok(())
}
