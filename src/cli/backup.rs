//! Backup CLI commands
//!
//! Implements CLI commands for rotating, listing, restoring and pruning
//! backup generations.

use std::path::PathBuf;

use clap::Subcommand;

use crate::backup::{parse_generation_index, RotateOutcome, Rotator};
use crate::config::settings::{validate_retention_limit, Settings};
use crate::display::format_generation_list;
use crate::error::{BackupError, BackupResult};

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Move a data directory aside as the newest backup generation
    Rotate {
        /// Data directory to back up
        path: PathBuf,

        /// Number of generations to keep (overrides the configured limit)
        #[arg(short, long)]
        keep: Option<usize>,
    },

    /// List the backup generations of a data directory
    List {
        /// Data directory whose backups to list
        path: PathBuf,

        /// Retention limit used to flag stale generations
        #[arg(short, long)]
        keep: Option<usize>,

        /// Print the generations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a backup generation back into place
    Restore {
        /// Data directory to restore into (must not exist)
        path: PathBuf,

        /// Generation index, directory name, or 'latest'
        generation: String,
    },

    /// Delete generations beyond the retention limit
    Prune {
        /// Data directory whose backups to prune
        path: PathBuf,

        /// Number of generations to keep (overrides the configured limit)
        #[arg(short, long)]
        keep: Option<usize>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(settings: &Settings, cmd: BackupCommands) -> BackupResult<()> {
    match cmd {
        BackupCommands::Rotate { path, keep } => {
            let limit = resolve_limit(settings, keep)?;
            let rotator = Rotator::new(&path)?;

            match rotator.rotate(limit)? {
                RotateOutcome::Skipped => {
                    println!("Nothing to back up: {} does not exist.", path.display());
                }
                RotateOutcome::Rotated {
                    generations,
                    discarded,
                } => {
                    println!(
                        "Backed up {} to {}",
                        path.display(),
                        rotator.generation(0).path.display()
                    );
                    if let Some(discarded) = discarded {
                        println!("Discarded oldest backup: {}", discarded.display());
                    }
                    println!("Generations kept: {} (limit {})", generations, limit);
                }
            }
        }

        BackupCommands::List { path, keep, json } => {
            let limit = resolve_limit(settings, keep)?;
            let rotator = Rotator::new(&path)?;
            let infos = rotator.describe_generations(limit)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&infos)?);
                return Ok(());
            }

            println!("Backups of {}", rotator.target_path().display());
            println!();
            println!("{}", format_generation_list(&infos, chrono::Utc::now()));
        }

        BackupCommands::Restore { path, generation } => {
            let rotator = Rotator::new(&path)?;
            let index = resolve_generation(&rotator, &generation)?;

            let result = rotator.restore(index)?;
            println!("Restore complete!");
            println!("{}", result.summary());
        }

        BackupCommands::Prune { path, keep, force } => {
            let limit = resolve_limit(settings, keep)?;
            let rotator = Rotator::new(&path)?;
            let stale: Vec<_> = rotator.scan_generations()?.into_iter().skip(limit).collect();

            if stale.is_empty() {
                println!("No generations to prune (limit {}).", limit);
                return Ok(());
            }

            println!("Prune Summary");
            println!("=============");
            println!("Retention limit: {}", limit);
            println!("To be deleted:");
            for generation in &stale {
                println!("  {}", generation.path.display());
            }
            println!();

            if !force {
                println!("To delete these generations, run again with --force flag:");
                println!("  dirbackup prune {} --force", path.display());
                return Ok(());
            }

            let removed = rotator.prune(limit)?;
            println!("Deleted {} generation(s).", removed.len());
        }
    }

    Ok(())
}

/// Pick the retention limit: the command-line override, else the settings
fn resolve_limit(settings: &Settings, keep: Option<usize>) -> BackupResult<usize> {
    let limit = keep.unwrap_or(settings.retention_limit);
    validate_retention_limit(limit)?;
    Ok(limit)
}

/// Resolve a generation argument: "latest", an index, or a directory name
fn resolve_generation(rotator: &Rotator, arg: &str) -> BackupResult<usize> {
    if arg == "latest" {
        return Ok(0);
    }

    if let Ok(index) = arg.parse::<usize>() {
        return Ok(index);
    }

    let name = std::path::Path::new(arg)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(arg);

    parse_generation_index(rotator.target_name(), name).ok_or_else(|| {
        BackupError::Validation(format!(
            "'{}' is not a generation of '{}'",
            arg,
            rotator.target_name()
        ))
    })
}
