//! Application-wide constants.
//!
//! Centralized configuration values to avoid magic strings throughout the codebase.

/// Name of the git binary looked up on PATH.
pub const GIT_BIN: &str = "git";

/// Companion executable performing the fetch-then-fast-forward-or-rebase.
/// Invoked as `git smart-pull`, so git must find `git-smart-pull` on PATH.
pub const SMART_PULL_BIN: &str = "git-smart-pull";

/// Subcommand name passed to git for the smart pull step.
pub const SMART_PULL_SUBCOMMAND: &str = "smart-pull";

/// Git directory name used to detect repositories.
pub const GIT_DIR: &str = ".git";
