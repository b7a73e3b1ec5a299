use crate::balance::{domain_balance, DomainBalance};
use crate::team::{people, TeamMember};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Length of the ranked `top_strengths` list.
pub const TOP_STRENGTHS_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthCount {
    pub strength: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthHolders {
    pub strength: String,
    /// "You" for the manager, otherwise the member's name.
    pub holders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAnalytics {
    /// The manager plus every team member.
    pub total_members: usize,
    pub domain_balance: DomainBalance,
    pub top_strengths: Vec<StrengthCount>,
    pub strength_distribution: Vec<StrengthHolders>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Manager strengths followed by each member's strengths, in input order.
pub fn combined_strengths<'a>(
    members: &'a [TeamMember],
    manager_strengths: &'a [String],
) -> Vec<&'a str> {
    manager_strengths
        .iter()
        .chain(members.iter().flat_map(|m| m.top_strengths.iter()))
        .map(String::as_str)
        .collect()
}

/// Occurrence counts in first-encountered order.
fn tally<'a>(strengths: &[&'a str]) -> Vec<(&'a str, usize)> {
    let mut order: Vec<(&'a str, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for &s in strengths {
        match index.get(s) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(s, order.len());
                order.push((s, 1));
            }
        }
    }
    order
}

/// Aggregate the manager's and the team's strengths.
///
/// Rankings use a stable sort, so equal counts keep first-encountered order
/// (manager strengths first, then members in input order).
pub fn team_analytics(members: &[TeamMember], manager_strengths: &[String]) -> TeamAnalytics {
    let combined = combined_strengths(members, manager_strengths);

    let mut top = tally(&combined);
    top.sort_by(|a, b| b.1.cmp(&a.1));
    let top_strengths = top
        .into_iter()
        .take(TOP_STRENGTHS_LIMIT)
        .map(|(strength, count)| StrengthCount {
            strength: strength.to_string(),
            count,
        })
        .collect();

    let mut distribution: Vec<StrengthHolders> = Vec::new();
    // Index into people() of the most recent holder of each entry.
    let mut last_holder: Vec<usize> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (p, person) in people(members, manager_strengths).into_iter().enumerate() {
        for strength in person.strengths() {
            let i = *index.entry(strength.as_str()).or_insert_with(|| {
                distribution.push(StrengthHolders {
                    strength: strength.clone(),
                    holders: Vec::new(),
                });
                last_holder.push(usize::MAX);
                distribution.len() - 1
            });
            // A person listing the same strength twice is still one holder.
            if last_holder[i] != p {
                last_holder[i] = p;
                distribution[i].holders.push(person.label().to_string());
            }
        }
    }
    distribution.sort_by(|a, b| b.holders.len().cmp(&a.holders.len()));

    TeamAnalytics {
        total_members: members.len() + 1,
        domain_balance: domain_balance(&combined),
        top_strengths,
        strength_distribution: distribution,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
