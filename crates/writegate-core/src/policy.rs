//! Policy document loading and allow-list resolution.

use crate::error::PolicyError;
use crate::resolve::resolve_path;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Policy document location, relative to the project root.
pub const POLICY_RELATIVE_PATH: &str = ".claude/security-policy.yaml";

/// On-disk shape of the security policy document.
///
/// Only `allowed_write_directories` is interpreted here; unknown keys are
/// ignored so the same document can carry settings for other gates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PolicyDocument {
    pub allowed_write_directories: Vec<serde_yaml::Value>,
}

/// Resolved directory allow-list. Non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    dirs: Vec<PathBuf>,
}

impl AllowList {
    /// Build an allow-list from already-resolved directories.
    ///
    /// Returns `None` for an empty list: no entries means restrictions are
    /// disabled, not that everything is denied.
    pub fn new(dirs: Vec<PathBuf>) -> Option<Self> {
        if dirs.is_empty() {
            None
        } else {
            Some(Self { dirs })
        }
    }

    /// The resolved directories, in document order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

/// Default policy document location for a project root.
pub fn default_policy_path(project_dir: &Path) -> PathBuf {
    project_dir.join(POLICY_RELATIVE_PATH)
}

/// Load the directory allow-list from a policy document.
///
/// Returns `None` whenever restrictions are not in effect: the file is
/// missing, the document does not parse, the key is absent, or no entry
/// survives filtering. A malformed policy disables the feature; it never
/// fails closed.
pub fn load_allowed_dirs(policy_path: &Path, project_dir: &Path) -> Option<AllowList> {
    let doc = match read_policy(policy_path) {
        Ok(doc) => doc,
        Err(err) => {
            debug!(path = %policy_path.display(), "policy not loaded: {err}");
            return None;
        }
    };

    AllowList::new(resolve_entries(&doc.allowed_write_directories, project_dir))
}

fn read_policy(path: &Path) -> Result<PolicyDocument, PolicyError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Trim, filter, and resolve raw allow-list entries.
///
/// Non-string and empty entries are skipped rather than treated as errors.
/// Relative entries are joined to the project root before resolution.
fn resolve_entries(entries: &[serde_yaml::Value], project_dir: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    for entry in entries {
        let Some(raw) = entry.as_str() else {
            debug!(?entry, "skipping non-string allow-list entry");
            continue;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let entry_path = Path::new(trimmed);
        let joined = if entry_path.is_absolute() {
            entry_path.to_path_buf()
        } else {
            project_dir.join(entry_path)
        };
        dirs.push(resolve_path(&joined));
    }

    dirs
}
