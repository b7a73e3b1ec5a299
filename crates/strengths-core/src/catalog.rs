//! The fixed catalog of 34 strength themes.
//!
//! Names and domain labels are a shared vocabulary with stored profiles, so
//! spelling and capitalization must not change. Catalog order (grouped by
//! domain, alphabetical within a domain) is also the order gap analysis
//! reports missing strengths in.

use crate::types::StrengthDomain;
use crate::types::StrengthDomain::{Executing, Influencing, RelationshipBuilding, StrategicThinking};

/// A catalog entry: the theme name, its domain, and a one-line summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub name: &'static str,
    pub domain: StrengthDomain,
    pub summary: &'static str,
}

/// Domain assigned to names that are not in the catalog.
pub const FALLBACK_DOMAIN: StrengthDomain = StrengthDomain::StrategicThinking;

pub const STRENGTHS: &[Strength] = &[
    // Executing
    Strength {
        name: "Achiever",
        domain: Executing,
        summary: "Works hard and takes great satisfaction from being busy and productive.",
    },
    Strength {
        name: "Arranger",
        domain: Executing,
        summary: "Organizes resources and people flexibly for maximum productivity.",
    },
    Strength {
        name: "Belief",
        domain: Executing,
        summary: "Holds enduring core values that give life meaning and direction.",
    },
    Strength {
        name: "Consistency",
        domain: Executing,
        summary: "Treats people the same and sets up clear rules that everyone follows.",
    },
    Strength {
        name: "Deliberative",
        domain: Executing,
        summary: "Takes serious care in making decisions and anticipates obstacles.",
    },
    Strength {
        name: "Discipline",
        domain: Executing,
        summary: "Enjoys routine and structure, creating order in the surrounding world.",
    },
    Strength {
        name: "Focus",
        domain: Executing,
        summary: "Sets direction, follows through, and stays on track toward goals.",
    },
    Strength {
        name: "Responsibility",
        domain: Executing,
        summary: "Takes psychological ownership of commitments and follows through.",
    },
    Strength {
        name: "Restorative",
        domain: Executing,
        summary: "Is adept at dealing with problems and figuring out what is wrong.",
    },
    // Influencing
    Strength {
        name: "Activator",
        domain: Influencing,
        summary: "Turns thoughts into action and is often impatient to get started.",
    },
    Strength {
        name: "Command",
        domain: Influencing,
        summary: "Has presence, takes control of a situation, and makes decisions.",
    },
    Strength {
        name: "Communication",
        domain: Influencing,
        summary: "Finds it easy to put thoughts into words and is a good presenter.",
    },
    Strength {
        name: "Competition",
        domain: Influencing,
        summary: "Measures progress against the performance of others and strives to win.",
    },
    Strength {
        name: "Maximizer",
        domain: Influencing,
        summary: "Focuses on strengths to stimulate personal and group excellence.",
    },
    Strength {
        name: "Self-Assurance",
        domain: Influencing,
        summary: "Feels confident in the ability to take risks and manage one's own life.",
    },
    Strength {
        name: "Significance",
        domain: Influencing,
        summary: "Wants to make a big impact and be recognized by others.",
    },
    Strength {
        name: "Woo",
        domain: Influencing,
        summary: "Loves the challenge of meeting new people and winning them over.",
    },
    // Relationship Building
    Strength {
        name: "Adaptability",
        domain: RelationshipBuilding,
        summary: "Prefers to go with the flow and takes things as they come.",
    },
    Strength {
        name: "Connectedness",
        domain: RelationshipBuilding,
        summary: "Believes things happen for a reason and that everything is linked.",
    },
    Strength {
        name: "Developer",
        domain: RelationshipBuilding,
        summary: "Recognizes and cultivates the potential in others.",
    },
    Strength {
        name: "Empathy",
        domain: RelationshipBuilding,
        summary: "Senses the feelings of other people by imagining their situations.",
    },
    Strength {
        name: "Harmony",
        domain: RelationshipBuilding,
        summary: "Looks for consensus and areas of agreement, avoiding conflict.",
    },
    Strength {
        name: "Includer",
        domain: RelationshipBuilding,
        summary: "Accepts others and makes an effort to include people who feel left out.",
    },
    Strength {
        name: "Individualization",
        domain: RelationshipBuilding,
        summary: "Is intrigued by the unique qualities of each person.",
    },
    Strength {
        name: "Positivity",
        domain: RelationshipBuilding,
        summary: "Brings contagious enthusiasm and gets others excited about their work.",
    },
    Strength {
        name: "Relator",
        domain: RelationshipBuilding,
        summary: "Enjoys close relationships and working hard with friends toward a goal.",
    },
    // Strategic Thinking
    Strength {
        name: "Analytical",
        domain: StrategicThinking,
        summary: "Searches for reasons and causes and thinks about all the factors.",
    },
    Strength {
        name: "Context",
        domain: StrategicThinking,
        summary: "Looks to the past to understand the present.",
    },
    Strength {
        name: "Futuristic",
        domain: StrategicThinking,
        summary: "Is inspired by the future and what could be, and inspires others with it.",
    },
    Strength {
        name: "Ideation",
        domain: StrategicThinking,
        summary: "Is fascinated by ideas and finds connections between disparate things.",
    },
    Strength {
        name: "Input",
        domain: StrategicThinking,
        summary: "Has a craving to know more and likes to collect and archive information.",
    },
    Strength {
        name: "Intellection",
        domain: StrategicThinking,
        summary: "Enjoys intellectual activity, introspection, and discussion.",
    },
    Strength {
        name: "Learner",
        domain: StrategicThinking,
        summary: "Loves to learn and is energized by the process of improving.",
    },
    Strength {
        name: "Strategic",
        domain: StrategicThinking,
        summary: "Creates alternative ways to proceed and spots relevant patterns quickly.",
    },
];

/// Exact-name lookup.
pub fn get(name: &str) -> Option<&'static Strength> {
    STRENGTHS.iter().find(|s| s.name == name)
}

/// Exact-name lookup, then a case-insensitive match. For user-facing search,
/// not for classification.
pub fn lookup(name: &str) -> Option<&'static Strength> {
    let name = name.trim();
    get(name).or_else(|| STRENGTHS.iter().find(|s| s.name.eq_ignore_ascii_case(name)))
}

pub fn is_known(name: &str) -> bool {
    get(name).is_some()
}

/// Domain of a strength name. Unknown or empty names map to
/// [`FALLBACK_DOMAIN`] instead of failing, so legacy or malformed stored
/// data still renders.
pub fn domain_of(name: &str) -> StrengthDomain {
    get(name).map(|s| s.domain).unwrap_or(FALLBACK_DOMAIN)
}

/// Catalog entries of one domain, in catalog order.
pub fn by_domain(domain: StrengthDomain) -> impl Iterator<Item = &'static Strength> {
    STRENGTHS.iter().filter(move |s| s.domain == domain)
}

/// Names from `strengths` that are not in the catalog, in input order.
pub fn unknown_names<S: AsRef<str>>(strengths: &[S]) -> Vec<String> {
    strengths
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !is_known(s))
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
