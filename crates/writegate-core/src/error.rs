//! Error types for the writegate-core crate.

/// Errors that can occur while reading a policy document.
///
/// These stay internal: the loader maps every variant to the
/// "restrictions disabled" state instead of propagating it.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// I/O error while reading the policy file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML in the policy file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
