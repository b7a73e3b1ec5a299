use crate::catalog::domain_of;
use crate::types::StrengthDomain;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DomainBalance
// ---------------------------------------------------------------------------

/// Per-domain tally over a multiset of strength names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBalance {
    pub executing: usize,
    pub influencing: usize,
    pub relationship_building: usize,
    pub strategic_thinking: usize,
}

impl DomainBalance {
    pub fn get(&self, domain: StrengthDomain) -> usize {
        match domain {
            StrengthDomain::Executing => self.executing,
            StrengthDomain::Influencing => self.influencing,
            StrengthDomain::RelationshipBuilding => self.relationship_building,
            StrengthDomain::StrategicThinking => self.strategic_thinking,
        }
    }

    fn bucket_mut(&mut self, domain: StrengthDomain) -> &mut usize {
        match domain {
            StrengthDomain::Executing => &mut self.executing,
            StrengthDomain::Influencing => &mut self.influencing,
            StrengthDomain::RelationshipBuilding => &mut self.relationship_building,
            StrengthDomain::StrategicThinking => &mut self.strategic_thinking,
        }
    }

    pub fn add(&mut self, name: &str) {
        *self.bucket_mut(domain_of(name)) += 1;
    }

    pub fn total(&self) -> usize {
        self.executing + self.influencing + self.relationship_building + self.strategic_thinking
    }

    /// `(domain, count)` pairs in canonical domain order.
    pub fn iter(&self) -> impl Iterator<Item = (StrengthDomain, usize)> + '_ {
        StrengthDomain::all().iter().map(move |&d| (d, self.get(d)))
    }

    /// Domain with the highest count; earlier domains win ties. `None` when empty.
    pub fn dominant(&self) -> Option<StrengthDomain> {
        if self.total() == 0 {
            return None;
        }
        let mut best = StrengthDomain::Executing;
        for (domain, count) in self.iter() {
            if count > self.get(best) {
                best = domain;
            }
        }
        Some(best)
    }
}

/// Tally `strengths` by domain. Unknown names land in the fallback bucket.
pub fn domain_balance<S: AsRef<str>>(strengths: &[S]) -> DomainBalance {
    strengths.iter().fold(DomainBalance::default(), |mut acc, s| {
        acc.add(s.as_ref());
        acc
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
