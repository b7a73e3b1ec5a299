use crate::catalog;
use crate::error::{Result, StrengthsError};
use crate::{io, paths};
use crate::types::{is_manager_alias, MANAGER_LABEL};
use crate::validation::validate_selection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// Someone whose strengths take part in team analytics.
///
/// The manager is its own variant rather than a member with a sentinel id,
/// so nothing can persist or delete it through the member store.
#[derive(Debug, Clone, Copy)]
pub enum Person<'a> {
    Manager { strengths: &'a [String] },
    Member(&'a TeamMember),
}

impl<'a> Person<'a> {
    pub fn label(&self) -> &'a str {
        match *self {
            Person::Manager { .. } => MANAGER_LABEL,
            Person::Member(m) => &m.name,
        }
    }

    pub fn strengths(&self) -> &'a [String] {
        match *self {
            Person::Manager { strengths } => strengths,
            Person::Member(m) => &m.top_strengths,
        }
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, Person::Manager { .. })
    }
}

/// The manager followed by every member, in input order.
pub fn people<'a>(members: &'a [TeamMember], manager_strengths: &'a [String]) -> Vec<Person<'a>> {
    std::iter::once(Person::Manager {
        strengths: manager_strengths,
    })
    .chain(members.iter().map(Person::Member))
    .collect()
}

fn warn_unknown(owner: &str, strengths: &[String]) {
    let unknown = catalog::unknown_names(strengths);
    if !unknown.is_empty() {
        tracing::warn!(
            owner,
            unknown = %unknown.join(", "),
            "stored strengths are not in the catalog; they will count as Strategic Thinking"
        );
    }
}

/// Member names must be non-empty, must not be a manager alias, and must be
/// unique across the team ignoring case. `except_id` skips the member being
/// renamed.
fn check_name(root: &Path, name: &str, except_id: Option<&str>) -> Result<()> {
    if name.is_empty() {
        return Err(StrengthsError::EmptyName);
    }
    if is_manager_alias(name) {
        return Err(StrengthsError::ReservedName(name.to_string()));
    }
    let taken = TeamMember::list(root)?
        .iter()
        .any(|m| Some(m.id.as_str()) != except_id && m.name.eq_ignore_ascii_case(name));
    if taken {
        return Err(StrengthsError::MemberExists(name.to_string()));
    }
    Ok(())
}

fn require_valid(strengths: &[String]) -> Result<()> {
    let validation = validate_selection(strengths);
    if validation.valid {
        Ok(())
    } else {
        Err(StrengthsError::InvalidSelection(validation.errors))
    }
}

// ---------------------------------------------------------------------------
// ManagerProfile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerProfile {
    pub name: String,
    pub top_strengths: Vec<String>,
    pub onboarded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ManagerProfile {
    /// Validate the selection and persist it. Re-onboarding replaces the
    /// name and strengths but keeps the original `onboarded_at`.
    pub fn onboard(root: &Path, name: impl Into<String>, strengths: Vec<String>) -> Result<Self> {
        require_valid(&strengths)?;

        let now = Utc::now();
        let onboarded_at = match Self::load(root) {
            Ok(existing) => existing.onboarded_at,
            Err(StrengthsError::ProfileNotFound) => now,
            Err(e) => return Err(e),
        };
        let profile = Self {
            name: name.into(),
            top_strengths: strengths,
            onboarded_at,
            updated_at: now,
        };
        profile.save(root)?;
        Ok(profile)
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::profile_path(root);
        if !path.exists() {
            return Err(StrengthsError::ProfileNotFound);
        }
        let profile: ManagerProfile = io::read_yaml(&path)?;
        warn_unknown(MANAGER_LABEL, &profile.top_strengths);
        Ok(profile)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::profile_path(root);
        io::write_yaml(&path, self)?;
        tracing::debug!(path = %path.display(), "saved manager profile");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TeamMember
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub top_strengths: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, top_strengths: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            top_strengths,
            created_at: now,
            updated_at: now,
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn create(root: &Path, name: impl Into<String>, strengths: Vec<String>) -> Result<Self> {
        let name: String = name.into();
        let name = name.trim().to_string();
        require_valid(&strengths)?;
        check_name(root, &name, None)?;

        let member = Self::new(name, strengths);
        member.save(root)?;
        Ok(member)
    }

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        let path = paths::member_path(root, id);
        if !path.exists() {
            return Err(StrengthsError::MemberNotFound(id.to_string()));
        }
        let member: TeamMember = io::read_yaml(&path)?;
        warn_unknown(&member.name, &member.top_strengths);
        Ok(member)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::member_path(root, &self.id);
        io::write_yaml(&path, self)?;
        tracing::debug!(id = %self.id, name = %self.name, "saved team member");
        Ok(())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = paths::members_dir(root);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut members = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type()?.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("yaml")
            {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match Self::load(root, id) {
                Ok(m) => members.push(m),
                Err(StrengthsError::MemberNotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        members.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(members)
    }

    /// Resolve `key` as an exact id, a unique id prefix, or a
    /// case-insensitive name.
    pub fn find(root: &Path, key: &str) -> Result<Self> {
        let key = key.trim();
        let members = Self::list(root)?;

        if let Some(m) = members.iter().find(|m| m.id == key) {
            return Ok(m.clone());
        }

        let by_name: Vec<&TeamMember> = members
            .iter()
            .filter(|m| m.name.eq_ignore_ascii_case(key))
            .collect();
        match by_name.as_slice() {
            [only] => return Ok((*only).clone()),
            [] => {}
            _ => return Err(StrengthsError::AmbiguousMember(key.to_string())),
        }

        if key.is_empty() {
            return Err(StrengthsError::MemberNotFound(key.to_string()));
        }
        let by_prefix: Vec<&TeamMember> =
            members.iter().filter(|m| m.id.starts_with(key)).collect();
        match by_prefix.as_slice() {
            [only] => Ok((*only).clone()),
            [] => Err(StrengthsError::MemberNotFound(key.to_string())),
            _ => Err(StrengthsError::AmbiguousMember(key.to_string())),
        }
    }

    pub fn remove(root: &Path, id: &str) -> Result<()> {
        let path = paths::member_path(root, id);
        if !path.exists() {
            return Err(StrengthsError::MemberNotFound(id.to_string()));
        }
        std::fs::remove_file(&path)?;
        tracing::debug!(id, "removed team member");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    pub fn update_strengths(&mut self, strengths: Vec<String>) -> Result<()> {
        require_valid(&strengths)?;
        self.top_strengths = strengths;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Rename and persist. The new name must pass the same checks as
    /// [`TeamMember::create`].
    pub fn rename(&mut self, root: &Path, name: &str) -> Result<()> {
        let name = name.trim();
        check_name(root, name, Some(&self.id))?;
        self.name = name.to_string();
        self.updated_at = Utc::now();
        self.save(root)
    }
}

/// Load the manager profile and every team member.
pub fn load_team(root: &Path) -> Result<(ManagerProfile, Vec<TeamMember>)> {
    let profile = ManagerProfile::load(root)?;
    let members = TeamMember::list(root)?;
    Ok((profile, members))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
