use anyhow::Context;
use strengths_core::config::Config;
use strengths_core::paths;
use std::path::Path;

pub fn run(root: &Path, team_name: &str) -> anyhow::Result<()> {
    let created = Config::init(root, team_name).context("failed to initialize team store")?;
    let dir = paths::strengths_dir(root);

    if created {
        tracing::info!(root = %root.display(), "initialized team store");
        println!("Initialized team store in {}", dir.display());
        println!("Next: strengths onboard --name <you> <five strengths>");
    } else {
        println!("Team store already initialized in {}", dir.display());
    }
    Ok(())
}
