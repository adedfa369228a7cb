//! External executable discovery.
//!
//! The tool shells out for every git operation, so both `git` and the
//! `git-smart-pull` helper must be on PATH before anything else runs.

use crate::constants::{GIT_BIN, SMART_PULL_BIN};

/// Checks whether an executable is discoverable on the current search path.
/// Pure query, no caching.
#[must_use]
pub fn executable_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Verifies all required executables are available, aborting with a clear
/// message otherwise. Failing here beats a confusing spawn error mid-run.
pub fn check_dependencies() -> anyhow::Result<()> {
    for binary in [GIT_BIN, SMART_PULL_BIN] {
        if !executable_exists(binary) {
            anyhow::bail!("Required executable '{}' not found on PATH", binary);
        }
    }
    Ok(())
}
