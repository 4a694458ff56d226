//! Template source tree
//!
//! A template root is a directory holding the Cursor configuration to
//! distribute:
//! - `.cursor/` with rules and skills (required, copied recursively)
//! - `.cursorignore` and `README.md` (copied if present)
//! - any other top-level files, minus a small skip list
//!
//! The file contents are opaque payloads. Nothing here reads or validates
//! rule/skill markdown.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration directory every template must contain
pub const CONFIG_DIR: &str = ".cursor";

/// Top-level ignore file, copied if present
pub const IGNORE_FILE: &str = ".cursorignore";

/// Top-level readme, copied if present
pub const README_FILE: &str = "README.md";

/// Top-level names that are never deployed: the legacy deploy script and
/// version-control metadata
const SKIPPED: &[&str] = &["deploy.sh", ".git", ".gitignore"];

/// Kind of a deployable entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// The `.cursor/` directory, copied recursively
    ConfigDir,
    /// The `.cursorignore` file
    IgnoreFile,
    /// The top-level `README.md`
    Readme,
    /// Any other top-level file
    Extra,
}

/// One entry of the copy plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanEntry {
    /// Name relative to the template root (also the path under the destination)
    pub name: String,
    /// Entry kind
    pub kind: EntryKind,
    /// Size in bytes (recursive total for the configuration directory)
    pub size_bytes: u64,
}

/// A validated template root
#[derive(Debug, Clone)]
pub struct TemplateSource {
    root: PathBuf,
}

impl TemplateSource {
    /// Open a template root, defaulting to the current directory
    ///
    /// Fails if the directory is missing or does not contain `.cursor/`.
    pub fn open(root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => std::env::current_dir().context("Could not determine current directory")?,
        };

        if !root.is_dir() {
            bail!("Template directory does not exist: {}", root.display());
        }
        if !root.join(CONFIG_DIR).is_dir() {
            bail!(
                "Not a template directory (no {}/ found): {}",
                CONFIG_DIR,
                root.display()
            );
        }

        Ok(Self { root })
    }

    /// The template root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the `.cursor/` configuration directory
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    /// Build the copy plan
    ///
    /// Order: the configuration directory, then the ignore file and readme
    /// when present, then every other top-level file (sorted by name) except
    /// the skipped names. Top-level subdirectories other than `.cursor/` are
    /// not deployed.
    pub fn plan(&self) -> Result<Vec<PlanEntry>> {
        let mut entries = Vec::new();

        let config_dir = self.config_dir();
        entries.push(PlanEntry {
            name: CONFIG_DIR.to_string(),
            kind: EntryKind::ConfigDir,
            size_bytes: dir_size(&config_dir)?,
        });

        for (name, kind) in [
            (IGNORE_FILE, EntryKind::IgnoreFile),
            (README_FILE, EntryKind::Readme),
        ] {
            let path = self.root.join(name);
            if path.is_file() {
                entries.push(PlanEntry {
                    name: name.to_string(),
                    kind,
                    size_bytes: fs::metadata(&path)?.len(),
                });
            }
        }

        let mut extras = Vec::new();
        let listing = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read: {}", self.root.display()))?;

        for entry in listing.flatten() {
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name == IGNORE_FILE || name == README_FILE || SKIPPED.contains(&name.as_str()) {
                continue;
            }
            extras.push(PlanEntry {
                name,
                kind: EntryKind::Extra,
                size_bytes: entry.metadata()?.len(),
            });
        }

        extras.sort_by(|a, b| a.name.cmp(&b.name));
        entries.extend(extras);

        Ok(entries)
    }
}

/// Total size of all files under a directory
fn dir_size(path: &Path) -> Result<u64> {
    let mut total = 0;

    for entry in walkdir::WalkDir::new(path) {
        let entry = entry.with_context(|| format!("Failed to walk: {}", path.display()))?;
        if entry.file_type().is_file() {
            total += entry.metadata()?.len();
        }
    }

    Ok(total)
}
