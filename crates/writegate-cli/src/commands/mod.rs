//! Subcommand implementations.

pub mod check_bash;
pub mod check_write;
pub mod extract_paths;

/// Print a verdict as a single JSON line on stdout.
pub fn emit<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
