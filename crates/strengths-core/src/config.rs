use crate::error::{Result, StrengthsError};
use crate::{io, paths};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// CoachConfig
// ---------------------------------------------------------------------------

/// Upper bound on `coach.max_tokens` before validation warns.
pub const MAX_COACH_TOKENS: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachConfig {
    #[serde(default = "default_coach_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_coach_model() -> String {
    "claude-3-5-haiku-latest".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            model: default_coach_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

// ---------------------------------------------------------------------------
// TeamConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub team: TeamConfig,
    #[serde(default)]
    pub coach: CoachConfig,
}

fn default_version() -> u32 {
    1
}

impl Config {
    pub fn new(team_name: impl Into<String>) -> Self {
        Self {
            version: 1,
            team: TeamConfig {
                name: team_name.into(),
                description: None,
            },
            coach: CoachConfig::default(),
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(StrengthsError::NotInitialized);
        }
        io::read_yaml(&path)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        io::write_yaml(&paths::config_path(root), self)
    }

    /// Create the store layout and a default config. An existing config is
    /// left alone. Returns true if the config was written.
    pub fn init(root: &Path, team_name: &str) -> Result<bool> {
        io::ensure_dir(&paths::members_dir(root))?;
        if paths::config_path(root).exists() {
            return Ok(false);
        }
        Self::new(team_name).save(root)?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.team.name.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "team.name is empty".to_string(),
            });
        }

        if self.coach.model.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "coach.model is empty".to_string(),
            });
        }

        if self.coach.max_tokens == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "coach.max_tokens must be greater than 0".to_string(),
            });
        } else if self.coach.max_tokens > MAX_COACH_TOKENS {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "coach.max_tokens={} (>{} is unusual)",
                    self.coach.max_tokens, MAX_COACH_TOKENS
                ),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::new("Platform Team");
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.team.name, "Platform Team");
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.coach, CoachConfig::default());
    }

    #[test]
    fn minimal_yaml_uses_defaults() {
        let yaml = "team:\n  name: Support\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.coach.max_tokens, 1024);
        assert!(cfg.team.description.is_none());

        let out = serde_yaml::to_string(&cfg).unwrap();
        assert!(!out.contains("description"));
    }

    #[test]
    fn partial_coach_section() {
        let yaml = "team:\n  name: Support\ncoach:\n  max_tokens: 2048\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.coach.max_tokens, 2048);
        assert_eq!(cfg.coach.model, default_coach_model());
    }

    #[test]
    fn load_missing_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(StrengthsError::NotInitialized)
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::new("Design");
        cfg.coach.max_tokens = 512;
        cfg.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.team.name, "Design");
        assert_eq!(loaded.coach.max_tokens, 512);
    }

    #[test]
    fn init_is_idempotent() {
        let dir = TempDir::new().unwrap();
        assert!(Config::init(dir.path(), "Design").unwrap());
        assert!(paths::members_dir(dir.path()).is_dir());
        assert!(!Config::init(dir.path(), "Other").unwrap());
        assert_eq!(Config::load(dir.path()).unwrap().team.name, "Design");
    }

    #[test]
    fn validate_default_has_no_warnings() {
        assert!(Config::new("Design").validate().is_empty());
    }

    #[test]
    fn validate_empty_team_name() {
        let cfg = Config::new("  ");
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Warning);
        assert!(warnings[0].message.contains("team.name"));
    }

    #[test]
    fn validate_coach_settings() {
        let mut cfg = Config::new("Design");
        cfg.coach.model = String::new();
        cfg.coach.max_tokens = 0;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.level == WarnLevel::Error));

        cfg.coach.model = "some-model".to_string();
        cfg.coach.max_tokens = 100_000;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains(">8192 is unusual"));
    }
}
