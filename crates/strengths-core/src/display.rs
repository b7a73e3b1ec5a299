use crate::catalog::domain_of;
use crate::types::StrengthDomain;

/// Color returned by [`domain_color`] for labels that are not a domain.
pub const DEFAULT_DOMAIN_COLOR: &str = "#6B7280";

/// Returns a new list ordered by canonical domain, then alphabetically within
/// a domain. Unknown names sort with the fallback domain. The input is left
/// untouched.
pub fn sort_by_domain<S: AsRef<str>>(strengths: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = strengths.iter().map(|s| s.as_ref().to_string()).collect();
    sorted.sort_by(|a, b| {
        domain_of(a)
            .cmp(&domain_of(b))
            .then_with(|| a.cmp(b))
    });
    sorted
}

/// Presentation color for a domain label. Unknown labels get a neutral gray.
pub fn domain_color(label: &str) -> &'static str {
    StrengthDomain::all()
        .iter()
        .find(|d| d.as_str() == label)
        .map(|d| d.color())
        .unwrap_or(DEFAULT_DOMAIN_COLOR)
}
