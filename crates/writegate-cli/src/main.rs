//! writegate: directory-scoped write restriction gate.
//!
//! Checks prospective file writes and shell commands against a per-project
//! allow-list of writable directories, reporting verdicts as JSON for an
//! invocation-control hook to enforce.

mod cli;
mod commands;

use clap::error::ErrorKind;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        // Invocation errors go to stdout as JSON, like every other result.
        Err(err) => {
            println!("{}", serde_json::json!({ "error": err.to_string() }));
            std::process::exit(1);
        }
    };

    // Initialize logging; stderr keeps stdout parseable.
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("writegate=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let policy = cli.policy.as_deref();

    match cli.command {
        Commands::CheckWrite {
            ref file_path,
            ref project_dir,
        } => {
            commands::check_write::run(file_path, project_dir, policy)?;
        }
        Commands::CheckBash {
            ref command,
            ref project_dir,
        } => {
            commands::check_bash::run(command, project_dir, policy)?;
        }
        Commands::ExtractPaths { ref command } => {
            commands::extract_paths::run(command)?;
        }
    }

    Ok(())
}
