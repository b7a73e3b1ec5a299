use crate::balance::{domain_balance, DomainBalance};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A domain count above this (out of a typical five) marks a person as
/// leaning on that domain.
pub const DOMAIN_LEAN_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplementarityResult {
    /// Present in both sets, in first-set order.
    pub shared: Vec<String>,
    pub unique1: Vec<String>,
    pub unique2: Vec<String>,
    pub domain_complement: bool,
}

fn leans(count: usize) -> bool {
    count > DOMAIN_LEAN_THRESHOLD
}

/// Executing pairs with Strategic Thinking, Influencing with Relationship
/// Building, in either direction.
fn domains_complement(a: &DomainBalance, b: &DomainBalance) -> bool {
    (leans(a.executing) && leans(b.strategic_thinking))
        || (leans(b.executing) && leans(a.strategic_thinking))
        || (leans(a.influencing) && leans(b.relationship_building))
        || (leans(b.influencing) && leans(a.relationship_building))
}

/// Compare two people's strengths.
pub fn complementary<S: AsRef<str>, T: AsRef<str>>(
    strengths1: &[S],
    strengths2: &[T],
) -> ComplementarityResult {
    let set1: HashSet<&str> = strengths1.iter().map(AsRef::as_ref).collect();
    let set2: HashSet<&str> = strengths2.iter().map(AsRef::as_ref).collect();

    let (shared, unique1): (Vec<&str>, Vec<&str>) = strengths1
        .iter()
        .map(AsRef::as_ref)
        .partition(|s| set2.contains(s));
    let unique2: Vec<&str> = strengths2
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !set1.contains(s))
        .collect();

    ComplementarityResult {
        shared: shared.into_iter().map(str::to_string).collect(),
        unique1: unique1.into_iter().map(str::to_string).collect(),
        unique2: unique2.into_iter().map(str::to_string).collect(),
        domain_complement: domains_complement(
            &domain_balance(strengths1),
            &domain_balance(strengths2),
        ),
    }
}
