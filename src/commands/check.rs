//! Check command - Compare the template against a deployed destination
//!
//! Reports each plan entry as up to date, different, or missing. Content
//! comparison is byte-for-byte; the configuration directory counts as
//! different if any file under it is absent or differs in the destination.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::utils;
use crate::template::source::{EntryKind, TemplateSource};

/// Comparison result for one plan entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    UpToDate,
    Different,
    Missing,
}

/// One checked entry
#[derive(Debug, Serialize)]
pub struct CheckedEntry {
    pub name: String,
    pub status: EntryStatus,
}

/// Execute the check command
pub fn execute(template_dir: Option<PathBuf>, destination: &str, json: bool) -> Result<()> {
    let template = TemplateSource::open(template_dir)?;
    let dest = utils::resolve_destination(destination);

    if !dest.is_dir() {
        bail!("Destination does not exist: {}", dest.display());
    }

    let mut checked = Vec::new();
    for entry in template.plan()? {
        let src = template.root().join(&entry.name);
        let dst = dest.join(&entry.name);
        let status = match entry.kind {
            EntryKind::ConfigDir => check_dir(&src, &dst)?,
            _ => check_file(&src, &dst)?,
        };
        checked.push(CheckedEntry {
            name: entry.name,
            status,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&checked)?);
        return Ok(());
    }

    println!("Checking {} against the template:", dest.display());
    println!();
    for entry in &checked {
        let label = match entry.status {
            EntryStatus::UpToDate => "up to date".green().to_string(),
            EntryStatus::Different => "different".yellow().to_string(),
            EntryStatus::Missing => "missing".red().to_string(),
        };
        println!("  {:<24} {}", entry.name, label);
    }

    let stale = checked
        .iter()
        .filter(|e| e.status != EntryStatus::UpToDate)
        .count();

    println!();
    if stale == 0 {
        println!("{}", "Destination matches the template.".green());
    } else {
        println!(
            "{} of {} entries out of date. Run `cursor-deploy deploy --force` to update.",
            stale,
            checked.len()
        );
    }

    Ok(())
}

fn check_file(src: &Path, dst: &Path) -> Result<EntryStatus> {
    if !dst.is_file() {
        return Ok(EntryStatus::Missing);
    }
    if fs::read(src)? == fs::read(dst)? {
        Ok(EntryStatus::UpToDate)
    } else {
        Ok(EntryStatus::Different)
    }
}

fn check_dir(src: &Path, dst: &Path) -> Result<EntryStatus> {
    if !dst.is_dir() {
        return Ok(EntryStatus::Missing);
    }

    for entry in WalkDir::new(src) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(src)?;
        if check_file(entry.path(), &dst.join(relative))? != EntryStatus::UpToDate {
            return Ok(EntryStatus::Different);
        }
    }

    Ok(EntryStatus::UpToDate)
}
