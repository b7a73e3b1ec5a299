use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrengthsError {
    #[error("not initialized: run 'strengths init'")]
    NotInitialized,

    #[error("manager profile not found: run 'strengths onboard'")]
    ProfileNotFound,

    #[error("team member not found: {0}")]
    MemberNotFound(String),

    #[error("team member already exists: {0}")]
    MemberExists(String),

    #[error("'{0}' is reserved for the manager; pick another member name")]
    ReservedName(String),

    #[error("team member name must not be empty")]
    EmptyName,

    #[error("'{0}' matches more than one team member; use the member id")]
    AmbiguousMember(String),

    #[error("invalid strength selection: {}", .0.join("; "))]
    InvalidSelection(Vec<String>),

    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, StrengthsError>;
