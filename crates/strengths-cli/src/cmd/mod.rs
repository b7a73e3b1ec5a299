pub mod catalog;
pub mod coach;
pub mod compare;
pub mod config;
pub mod gaps;
pub mod init;
pub mod member;
pub mod profile;
pub mod selection;
pub mod team;

use anyhow::Context;
use strengths_core::catalog::lookup;
use strengths_core::config::Config;
use std::path::Path;

/// Map user-typed names onto catalog spelling ("self-assurance" ->
/// "Self-Assurance"). Names that match nothing, empty ones included, pass
/// through trimmed so validation counts and reports them.
pub fn canonical_strengths(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|s| match lookup(&s) {
            Some(entry) => entry.name.to_string(),
            None => s.trim().to_string(),
        })
        .collect()
}

/// Fail with a hint unless `strengths init` has run.
pub fn require_init(root: &Path) -> anyhow::Result<Config> {
    Config::load(root).context("failed to load config")
}
