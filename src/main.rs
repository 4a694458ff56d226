//! cursor-deploy: CLI for distributing a Cursor rules/skills template
//!
//! Copies the template's `.cursor/` configuration directory, ignore file,
//! readme, and remaining top-level files into a target project, with
//! optional git initialization. The template files themselves are opaque
//! payloads; this tool never parses or validates their content.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod template;

#[derive(Parser)]
#[command(name = "cursor-deploy")]
#[command(about = "Deploy a Cursor rules/skills template into a project", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the template into a destination project
    Deploy {
        /// Destination project directory
        destination: String,

        /// Overwrite an existing destination without prompting
        #[arg(short, long)]
        force: bool,

        /// Skip git repository initialization
        #[arg(short = 'n', long)]
        no_git: bool,

        /// Show what would be copied without making changes
        #[arg(long)]
        dry_run: bool,

        /// Template root (defaults to the current directory)
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },

    /// List the template's deployable entries
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Template root (defaults to the current directory)
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },

    /// Compare the template against a deployed destination
    Check {
        /// Destination project directory
        destination: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Template root (defaults to the current directory)
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            destination,
            force,
            no_git,
            dry_run,
            template_dir,
        } => {
            let options = commands::deploy::DeployOptions {
                force,
                no_git,
                dry_run,
            };
            commands::deploy::execute(template_dir, &destination, &options)?;
        }

        Commands::List { json, template_dir } => {
            let output = commands::list::execute(template_dir, json)?;
            println!("{}", output);
        }

        Commands::Check {
            destination,
            json,
            template_dir,
        } => {
            commands::check::execute(template_dir, &destination, json)?;
        }
    }

    Ok(())
}
