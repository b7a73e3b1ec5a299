use crate::analytics::combined_strengths;
use crate::balance::domain_balance;
use crate::catalog::STRENGTHS;
use crate::team::TeamMember;
use crate::types::StrengthDomain;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A domain is weak when it holds fewer than this share (in percent) of all
/// strength instances on the team.
pub const WEAK_DOMAIN_PERCENT: usize = 20;

/// Length cap on `missing_strengths`.
pub const MISSING_STRENGTHS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGaps {
    pub weak_domains: Vec<StrengthDomain>,
    /// Catalog order, not ranked.
    pub missing_strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn recommendation_for(domain: StrengthDomain) -> &'static str {
    match domain {
        StrengthDomain::Executing => {
            "Consider adding team members with Executing strengths to help turn ideas into action and get things done."
        }
        StrengthDomain::Influencing => {
            "Consider developing Influencing strengths to help the team sell its ideas inside and outside the organization."
        }
        StrengthDomain::RelationshipBuilding => {
            "Consider strengthening Relationship Building to improve collaboration and hold the team together."
        }
        StrengthDomain::StrategicThinking => {
            "Consider adding Strategic Thinking strengths to help the team analyze information and plan for the future."
        }
    }
}

/// Coverage gaps across the manager's and the team's strengths.
pub fn identify_gaps(members: &[TeamMember], manager_strengths: &[String]) -> TeamGaps {
    let combined = combined_strengths(members, manager_strengths);
    let balance = domain_balance(&combined);
    let total = balance.total();

    // count < 20% of total, in integer arithmetic
    let weak_domains: Vec<StrengthDomain> = balance
        .iter()
        .filter(|&(_, count)| count * 100 < total * WEAK_DOMAIN_PERCENT)
        .map(|(domain, _)| domain)
        .collect();

    let present: HashSet<&str> = combined.iter().copied().collect();
    let missing_strengths = STRENGTHS
        .iter()
        .filter(|s| !present.contains(s.name))
        .take(MISSING_STRENGTHS_LIMIT)
        .map(|s| s.name.to_string())
        .collect();

    let recommendations = weak_domains
        .iter()
        .map(|&d| recommendation_for(d).to_string())
        .collect();

    TeamGaps {
        weak_domains,
        missing_strengths,
        recommendations,
    }
}
