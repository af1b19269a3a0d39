//! Validation entry points combining policy, resolution, and extraction.
//!
//! Both checks load the policy fresh on every call and never fail: any
//! internal problem degrades toward the most permissive safe reading of
//! that step, and the verdict reports what happened.

use crate::extract::extract_write_paths;
use crate::policy::{default_policy_path, load_allowed_dirs};
use crate::resolve::{is_path_allowed, resolve_path};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Verdict for a single prospective file write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteCheck {
    pub allowed: bool,
    pub reason: String,
    pub resolved_path: String,
    pub feature_enabled: bool,
}

/// Verdict for all write targets implied by a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandCheck {
    pub allowed: bool,
    pub denied_paths: Vec<String>,
    pub has_unparseable_writes: bool,
    pub unparseable_reasons: Vec<String>,
    pub feature_enabled: bool,
}

/// Check a single file path against the directory allow-list.
pub fn check_write_path(
    file_path: &Path,
    project_dir: &Path,
    policy_path: Option<&Path>,
) -> WriteCheck {
    let policy = policy_file(project_dir, policy_path);
    let resolved = resolve_path(file_path);

    let Some(allow) = load_allowed_dirs(&policy, project_dir) else {
        return WriteCheck {
            allowed: true,
            reason: "Directory restrictions not configured".to_string(),
            resolved_path: resolved.display().to_string(),
            feature_enabled: false,
        };
    };

    if is_path_allowed(&resolved, &allow) {
        WriteCheck {
            allowed: true,
            reason: "Path is within allowed directory".to_string(),
            resolved_path: resolved.display().to_string(),
            feature_enabled: true,
        }
    } else {
        WriteCheck {
            allowed: false,
            reason: format!("Path outside allowed directories: {}", resolved.display()),
            resolved_path: resolved.display().to_string(),
            feature_enabled: true,
        }
    }
}

/// Check every write target implied by a shell command.
///
/// With restrictions disabled the extractor is skipped entirely. Otherwise
/// each extracted candidate is resolved (relative candidates against the
/// project root) and checked; all denied targets are reported, and the
/// unparseable-write flags pass through for the caller to escalate.
pub fn check_bash_command(
    command: &str,
    project_dir: &Path,
    policy_path: Option<&Path>,
) -> CommandCheck {
    let policy = policy_file(project_dir, policy_path);

    let Some(allow) = load_allowed_dirs(&policy, project_dir) else {
        return CommandCheck {
            allowed: true,
            denied_paths: Vec::new(),
            has_unparseable_writes: false,
            unparseable_reasons: Vec::new(),
            feature_enabled: false,
        };
    };

    let extraction = extract_write_paths(command);
    let mut denied_paths = Vec::new();

    for candidate in &extraction.paths {
        let resolved = resolve_path(&join_candidate(candidate, project_dir));
        if !is_path_allowed(&resolved, &allow) {
            debug!(
                candidate = %candidate,
                resolved = %resolved.display(),
                "write target outside allowed directories"
            );
            denied_paths.push(resolved.display().to_string());
        }
    }

    CommandCheck {
        allowed: denied_paths.is_empty(),
        denied_paths,
        has_unparseable_writes: extraction.has_unparseable_writes,
        unparseable_reasons: extraction.unparseable_reasons,
        feature_enabled: true,
    }
}

fn policy_file(project_dir: &Path, policy_path: Option<&Path>) -> PathBuf {
    match policy_path {
        Some(path) => path.to_path_buf(),
        None => default_policy_path(project_dir),
    }
}

fn join_candidate(candidate: &str, project_dir: &Path) -> PathBuf {
    let path = Path::new(candidate);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_dir.join(path)
    }
}
