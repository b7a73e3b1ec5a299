use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const STRENGTHS_DIR: &str = ".strengths";
pub const MEMBERS_DIR: &str = ".strengths/members";

pub const CONFIG_FILE: &str = ".strengths/config.yaml";
pub const PROFILE_FILE: &str = ".strengths/profile.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn strengths_dir(root: &Path) -> PathBuf {
    root.join(STRENGTHS_DIR)
}

pub fn members_dir(root: &Path) -> PathBuf {
    root.join(MEMBERS_DIR)
}

pub fn member_path(root: &Path, id: &str) -> PathBuf {
    members_dir(root).join(format!("{id}.yaml"))
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn profile_path(root: &Path) -> PathBuf {
    root.join(PROFILE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/team");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/team/.strengths/config.yaml")
        );
        assert_eq!(
            profile_path(root),
            PathBuf::from("/tmp/team/.strengths/profile.yaml")
        );
        assert_eq!(
            member_path(root, "1234"),
            PathBuf::from("/tmp/team/.strengths/members/1234.yaml")
        );
    }
}
