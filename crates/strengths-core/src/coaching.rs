//! Prompt assembly for the coaching assistant.
//!
//! Builds the request the surrounding application sends to its LLM provider.
//! Sending it is someone else's job; everything here is pure.

use crate::analytics::TeamAnalytics;
use crate::catalog::domain_of;
use crate::complement::ComplementarityResult;
use crate::config::CoachConfig;
use crate::display::sort_by_domain;
use crate::gaps::TeamGaps;
use crate::team::{ManagerProfile, TeamMember};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachRequest {
    pub model: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<ChatMessage>,
}

impl CoachRequest {
    pub fn new(config: &CoachConfig, system: String) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            system,
            messages: Vec::new(),
        }
    }

    pub fn with_user_message(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: content.into(),
        });
        self
    }
}

// ---------------------------------------------------------------------------
// Prompt builders
// ---------------------------------------------------------------------------

/// "Achiever (Executing), Woo (Influencing)" in domain order.
fn describe_strengths(strengths: &[String]) -> String {
    if strengths.is_empty() {
        return "none recorded".to_string();
    }
    sort_by_domain(strengths)
        .iter()
        .map(|s| format!("{s} ({})", domain_of(s)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Prompt asking for collaboration advice between two people.
pub fn collaboration_prompt(
    first_label: &str,
    first: &[String],
    second_label: &str,
    second: &[String],
    result: &ComplementarityResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Give practical advice on how {first_label} and {second_label} can work well together, based on their CliftonStrengths."
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{first_label}: {}", describe_strengths(first));
    let _ = writeln!(out, "{second_label}: {}", describe_strengths(second));
    let _ = writeln!(out, "Shared strengths: {}", list_or_none(&result.shared));
    let _ = writeln!(
        out,
        "Only {first_label}: {}",
        list_or_none(&result.unique1)
    );
    let _ = writeln!(
        out,
        "Only {second_label}: {}",
        list_or_none(&result.unique2)
    );
    if result.domain_complement {
        let _ = writeln!(
            out,
            "Their dominant domains complement each other; explain how to use that."
        );
    } else {
        let _ = writeln!(
            out,
            "Their dominant domains overlap or are mixed; point out where they may need outside perspective."
        );
    }
    let _ = write!(out, "Keep it to three or four concrete suggestions.");
    out
}

/// System prompt for the coaching chat, grounded in the manager's profile
/// and the current team picture.
pub fn coach_system_prompt(
    profile: &ManagerProfile,
    members: &[TeamMember],
    analytics: &TeamAnalytics,
    gaps: &TeamGaps,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "You are a strengths-based leadership coach helping {}, a manager, lead their team using CliftonStrengths.",
        profile.name
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Manager's top 5: {}",
        describe_strengths(&profile.top_strengths)
    );
    let _ = writeln!(
        out,
        "Team size: {} (including the manager)",
        analytics.total_members
    );
    for member in members {
        let _ = writeln!(
            out,
            "- {}: {}",
            member.name,
            describe_strengths(&member.top_strengths)
        );
    }

    let balance: Vec<String> = analytics
        .domain_balance
        .iter()
        .map(|(d, n)| format!("{d} {n}"))
        .collect();
    let _ = writeln!(out, "Domain balance: {}", balance.join(", "));

    if gaps.weak_domains.is_empty() {
        let _ = writeln!(out, "No domain is under-represented.");
    } else {
        let weak: Vec<&str> = gaps.weak_domains.iter().map(|d| d.as_str()).collect();
        let _ = writeln!(out, "Under-represented domains: {}", weak.join(", "));
    }
    if let Some(dominant) = analytics.domain_balance.dominant() {
        let _ = writeln!(
            out,
            "The team leans toward {dominant}: {}",
            dominant.description()
        );
    }
    let _ = writeln!(out);
    let _ = write!(
        out,
        "Refer to people by name, tie advice to specific strengths, and keep answers short and actionable."
    );
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::team_analytics;
    use crate::complement::complementary;
    use crate::gaps::identify_gaps;
    use chrono::Utc;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn profile() -> ManagerProfile {
        ManagerProfile {
            name: "Dana".to_string(),
            top_strengths: names(&["Communication", "Empathy", "Futuristic", "Harmony", "Ideation"]),
            onboarded_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn describe_strengths_groups_by_domain() {
        let text = describe_strengths(&names(&["Learner", "Achiever"]));
        assert_eq!(text, "Achiever (Executing), Learner (Strategic Thinking)");
        assert_eq!(describe_strengths(&[]), "none recorded");
    }

    #[test]
    fn collaboration_prompt_mentions_both_people() {
        let a = names(&["Achiever", "Arranger", "Belief", "Focus", "Woo"]);
        let b = names(&["Analytical", "Context", "Futuristic", "Focus", "Input"]);
        let result = complementary(&a, &b);
        let prompt = collaboration_prompt("You", &a, "Alice", &b, &result);

        assert!(prompt.contains("You and Alice"));
        assert!(prompt.contains("Shared strengths: Focus"));
        assert!(prompt.contains("Only Alice: Analytical, Context, Futuristic, Input"));
        assert!(prompt.contains("complement each other"));
    }

    #[test]
    fn collaboration_prompt_without_complement() {
        let a = names(&["Woo"]);
        let result = complementary(&a, &a);
        let prompt = collaboration_prompt("You", &a, "Bob", &a, &result);
        assert!(prompt.contains("Only You: none"));
        assert!(prompt.contains("overlap or are mixed"));
    }

    #[test]
    fn coach_system_prompt_covers_team() {
        let profile = profile();
        let members = vec![TeamMember::new(
            "Alice",
            names(&["Achiever", "Activator", "Analytical", "Arranger", "Belief"]),
        )];
        let analytics = team_analytics(&members, &profile.top_strengths);
        let gaps = identify_gaps(&members, &profile.top_strengths);
        let prompt = coach_system_prompt(&profile, &members, &analytics, &gaps);

        assert!(prompt.contains("helping Dana"));
        assert!(prompt.contains("Team size: 2"));
        assert!(prompt.contains("- Alice: Achiever (Executing)"));
        assert!(prompt.contains("Executing 3, Influencing 2, Relationship Building 2, Strategic Thinking 3"));
        assert!(prompt.contains("No domain is under-represented."));
    }

    #[test]
    fn coach_system_prompt_lists_weak_domains() {
        let mut profile = profile();
        profile.top_strengths = names(&["Achiever", "Arranger", "Belief", "Focus", "Discipline"]);
        let analytics = team_analytics(&[], &profile.top_strengths);
        let gaps = identify_gaps(&[], &profile.top_strengths);
        let prompt = coach_system_prompt(&profile, &[], &analytics, &gaps);
        assert!(prompt.contains(
            "Under-represented domains: Influencing, Relationship Building, Strategic Thinking"
        ));
        assert!(prompt.contains("The team leans toward Executing"));
    }

    #[test]
    fn coach_request_serializes() {
        let cfg = CoachConfig::default();
        let req = CoachRequest::new(&cfg, "system".to_string()).with_user_message("hi");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], cfg.model.as_str());
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
    }
}
