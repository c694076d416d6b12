use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dirbackup::cli::{handle_backup_command, BackupCommands};
use dirbackup::config::{paths::CONFIG_DIR_ENV, AppPaths, Settings};

#[derive(Parser)]
#[command(
    name = "dirbackup",
    version,
    about = "Numbered backup rotation for data directories",
    long_about = "dirbackup keeps the contents of a data directory as a numbered \
                  backup (<dir>.old.0, <dir>.old.1, ...) before the directory is \
                  reset, discarding the oldest backup once the retention limit \
                  is reached."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration directory
    #[arg(long, global = true, env = CONFIG_DIR_ENV)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Backup(BackupCommands),

    /// Write the default configuration file
    Init,

    /// Show current configuration, or change the retention limit
    Config {
        /// New retention limit to save
        #[arg(short, long)]
        keep: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let paths = match cli.config_dir {
        Some(dir) => AppPaths::with_base_dir(dir),
        None => AppPaths::new()?,
    };
    // Read on every run so a changed limit applies to the next rotation.
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&settings, cmd)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Configuration written to: {}", paths.settings_file().display());
            println!("Retention limit: {}", settings.retention_limit);
        }
        Some(Commands::Config { keep: Some(keep) }) => {
            let updated = Settings {
                retention_limit: keep,
                ..settings
            };
            updated.save(&paths)?;
            println!("Retention limit set to {}", updated.retention_limit);
        }
        Some(Commands::Config { keep: None }) => {
            println!("dirbackup Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Retention limit: {}", settings.retention_limit);
        }
        None => {
            println!("dirbackup - numbered backup rotation for data directories");
            println!();
            println!("Run 'dirbackup --help' for usage information.");
        }
    }

    Ok(())
}
