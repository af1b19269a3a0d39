//! Symlink-safe path resolution and allow-list containment.

use crate::policy::AllowList;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolve a path to its canonical absolute form.
///
/// Symlinks are followed through the deepest existing ancestor, each one
/// resolved before any `..` that follows it, and any not-yet-existing tail
/// is rejoined, so paths about to be created still resolve. Never fails:
/// when the filesystem refuses to cooperate the lexically normalized path
/// is returned instead.
pub fn resolve_path(path: &Path) -> PathBuf {
    let absolute = absolutize(path);

    if absolute.exists() {
        return match absolute.canonicalize() {
            Ok(resolved) => resolved,
            Err(err) => {
                debug!(path = %absolute.display(), "canonicalize failed: {err}");
                normalize_path(&absolute)
            }
        };
    }

    match split_existing_ancestor(&absolute) {
        Some((existing_base, tail)) => normalize_path(&existing_base.join(tail)),
        None => normalize_path(&absolute),
    }
}

/// Whether `path` sits inside one of the allow-list directories.
///
/// Containment is component-wise: the path must equal an entry or extend it
/// across a separator boundary. A sibling directory sharing a name prefix
/// (`/repo/src` vs `/repo/src-evil`) never matches.
pub fn is_path_allowed(path: &Path, allow: &AllowList) -> bool {
    let resolved = normalize_path(path);
    allow
        .dirs()
        .iter()
        .any(|dir| resolved.starts_with(normalize_path(dir)))
}

// Dot components stay put here: a `..` after a symlink must be applied
// to the link target, which only canonicalization can see.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Split a non-existing path into its deepest existing ancestor
/// (canonicalized) and the remaining tail.
///
/// The tail keeps any `..` found on the non-existing stretch; nothing
/// there can be a symlink, so the caller folds it lexically.
fn split_existing_ancestor(path: &Path) -> Option<(PathBuf, PathBuf)> {
    let mut existing = path.to_path_buf();
    let mut tail = PathBuf::new();

    while !existing.exists() {
        let name = existing.components().next_back()?.as_os_str().to_os_string();
        if tail.as_os_str().is_empty() {
            tail = PathBuf::from(name);
        } else {
            tail = PathBuf::from(name).join(&tail);
        }
        existing = existing.parent()?.to_path_buf();
    }

    match existing.canonicalize() {
        Ok(canonical) => Some((canonical, tail)),
        Err(err) => {
            debug!(path = %existing.display(), "canonicalize failed: {err}");
            None
        }
    }
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::RootDir => out.push(component.as_os_str()),
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::Normal(seg) => out.push(seg),
        }
    }
    out
}
