//! writegate-core: Pre-execution write-path policy engine.
//!
//! Decides whether a prospective filesystem write, requested directly or
//! implied by a shell command, falls inside an administrator-configured
//! allow-list of directories. Restrictions are opt-in: a missing, empty,
//! or malformed policy document disables the gate rather than blocking
//! writes.

mod error;
pub mod extract;
pub mod policy;
pub mod resolve;
pub mod validate;

pub use error::PolicyError;
pub use extract::{extract_write_paths, Extraction};
pub use policy::{
    default_policy_path, load_allowed_dirs, AllowList, PolicyDocument, POLICY_RELATIVE_PATH,
};
pub use resolve::{is_path_allowed, resolve_path};
pub use validate::{check_bash_command, check_write_path, CommandCheck, WriteCheck};
