//! Deploy command - Copy the template into a destination project
//!
//! Single linear pass: resolve the destination, confirm overwrite if it
//! already exists, copy the plan entries, then initialize git unless asked
//! not to. Copy failures abort immediately; there is no rollback of files
//! already written.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::PathBuf;

use super::utils;
use crate::template::git;
use crate::template::source::{EntryKind, TemplateSource};

/// Options for the deploy command
pub struct DeployOptions {
    /// Skip the overwrite confirmation prompt
    pub force: bool,
    /// Skip git repository initialization
    pub no_git: bool,
    /// Print the plan without touching the filesystem
    pub dry_run: bool,
}

/// Execute the deploy command
pub fn execute(
    template_dir: Option<PathBuf>,
    destination: &str,
    options: &DeployOptions,
) -> Result<()> {
    let template = TemplateSource::open(template_dir)?;
    let dest = utils::resolve_destination(destination);
    let plan = template.plan()?;

    println!("Deploying Cursor template:");
    println!("  Source: {}", template.root().display());
    println!("  Destination: {}", dest.display());
    println!();

    if options.dry_run {
        println!("{}", "(DRY-RUN) Would copy the following:".blue());
        for entry in &plan {
            println!(
                "  {} ({})",
                entry.name,
                utils::format_size(entry.size_bytes)
            );
        }
        if !options.no_git && !git::is_repository(&dest) {
            println!("  + git init");
        }
        return Ok(());
    }

    if dest.exists() && !options.force {
        let proceed = utils::confirm(&format!(
            "Destination already exists: {}. Overwrite template files?",
            dest.display()
        ))?;
        if !proceed {
            println!("Aborted. No changes made.");
            return Ok(());
        }
    }

    fs::create_dir_all(&dest).with_context(|| format!("Failed to create: {}", dest.display()))?;

    for entry in &plan {
        let target = dest.join(&entry.name);
        match entry.kind {
            EntryKind::ConfigDir => {
                fs::create_dir_all(&target)
                    .with_context(|| format!("Failed to create: {}", target.display()))?;
                utils::copy_dir_contents(&template.config_dir(), &target)?;
            }
            _ => {
                let src = template.root().join(&entry.name);
                fs::copy(&src, &target).with_context(|| {
                    format!("Failed to copy {} to {}", src.display(), target.display())
                })?;
            }
        }
        println!(
            "{} {} ({})",
            "Copied:".green(),
            entry.name,
            utils::format_size(entry.size_bytes)
        );
    }

    println!();
    if options.no_git {
        println!("Skipping git initialization (--no-git).");
    } else if git::is_repository(&dest) {
        println!(
            "{} .git already present, skipping git init",
            "Note:".yellow()
        );
    } else {
        git::init_repository(&dest)?;
        println!(
            "{} git repository in {}",
            "Initialized:".green(),
            dest.display()
        );
    }

    println!();
    println!("{}", "Deploy complete!".green());
    println!();
    println!("Next steps:");
    println!("  1. Open {} in Cursor", dest.display());
    println!("  2. Review .cursor/ rules and skills for your project");
    println!("  3. Adjust .cursorignore to match your build outputs");

    Ok(())
}
