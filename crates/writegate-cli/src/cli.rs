//! CLI argument and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "writegate", version, about = "Directory-scoped write restriction gate")]
pub struct Cli {
    /// Policy document to use instead of <project_dir>/.claude/security-policy.yaml.
    #[arg(long, global = true, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single file path against the write allow-list.
    CheckWrite {
        /// File the caller intends to write.
        file_path: String,
        /// Project root the policy belongs to.
        project_dir: String,
    },

    /// Check every write target implied by a shell command.
    CheckBash {
        /// The command line to scan.
        command: String,
        /// Project root the policy belongs to.
        project_dir: String,
    },

    /// Extract write targets from a command without consulting any policy.
    ExtractPaths {
        /// The command line to scan.
        command: String,
    },
}
