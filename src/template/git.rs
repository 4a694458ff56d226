//! Git initialization for deployed destinations

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Whether the destination already contains a git repository
pub fn is_repository(dest: &Path) -> bool {
    dest.join(".git").exists()
}

/// Run `git init` in the destination
pub fn init_repository(dest: &Path) -> Result<()> {
    let status = Command::new("git")
        .arg("init")
        .current_dir(dest)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to run git. Is git installed?")?;

    if !status.success() {
        bail!("git init failed in: {}", dest.display());
    }

    Ok(())
}
