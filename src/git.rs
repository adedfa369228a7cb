//! Git command wrappers.
//!
//! This module provides a thin wrapper around git CLI commands,
//! handling command execution and error formatting. Every wrapper takes the
//! repository path explicitly; nothing relies on the process working
//! directory.

use crate::constants::{GIT_BIN, SMART_PULL_SUBCOMMAND};
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

/// Logger callback invoked before each git command.
pub type GitLogger = fn(repo: &Path, args: &[&str]);

/// Echoes the git command line to stderr (verbose mode).
pub fn verbose_logger(repo: &Path, args: &[&str]) {
    eprintln!(
        "  {}",
        format!("$ git {} ({})", args.join(" "), repo.display()).dimmed()
    );
}

/// Discards the command line (normal and quiet modes).
pub fn no_op_logger(_repo: &Path, _args: &[&str]) {}

/// Runs a git command with captured output, returning trimmed stdout.
pub fn run_git(repo: &Path, args: &[&str], logger: GitLogger) -> anyhow::Result<String> {
    logger(repo, args);
    let output = std::process::Command::new(GIT_BIN)
        .current_dir(repo)
        .args(args)
        .output()
        .context("Failed to execute git command")?;

    if output.status.success() {
        let result = String::from_utf8_lossy(&output.stdout);
        Ok(result.as_ref().trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git {} failed: {}", args.join(" "), stderr)
    }
}

/// Runs a git command with inherited stdout/stderr, so the subprocess's own
/// output reaches the terminal. Used for the sync operations, whose progress
/// output is the user-facing report.
pub fn run_git_passthrough(repo: &Path, args: &[&str], logger: GitLogger) -> anyhow::Result<()> {
    logger(repo, args);
    let status = std::process::Command::new(GIT_BIN)
        .current_dir(repo)
        .args(args)
        .status()
        .context("Failed to execute git command")?;

    if status.success() {
        Ok(())
    } else {
        anyhow::bail!("git {} failed with {}", args.join(" "), status)
    }
}

fn validate_branch_name(branch: &str) -> anyhow::Result<()> {
    if branch.contains('\0') || branch.contains('\n') || branch.is_empty() {
        anyhow::bail!("Invalid branch name: {:?}", branch);
    }
    Ok(())
}

/// Returns true iff the working tree has no modified, staged, or untracked
/// files. Uses the machine-readable status mode, so the result does not
/// depend on git's locale or message wording.
pub fn status_clean(repo: &Path, logger: GitLogger) -> anyhow::Result<bool> {
    run_git(repo, &["status", "--porcelain"], logger)
        .map(|output| output.is_empty())
        .context("Failed to check working tree status")
}

/// Returns the checked-out branch name, or the empty string when HEAD is
/// detached. Empty is a sentinel, never a valid branch name.
pub fn current_branch(repo: &Path, logger: GitLogger) -> anyhow::Result<String> {
    run_git(repo, &["branch", "--show-current"], logger)
        .context("Failed to get current branch")
}

/// Looks up the remote configured for a branch. Returns `None` when the
/// config key is unset (or the query fails for any other reason).
pub fn branch_remote(repo: &Path, branch: &str, logger: GitLogger) -> Option<String> {
    validate_branch_name(branch).ok()?;
    let key = format!("branch.{}.remote", branch);
    run_git(repo, &["config", &key], logger)
        .ok()
        .filter(|remote| !remote.is_empty())
}

/// Runs the `git smart-pull` helper: fetch, then fast-forward or rebase onto
/// the tracking branch.
pub fn smart_pull(repo: &Path, logger: GitLogger) -> anyhow::Result<()> {
    run_git_passthrough(repo, &[SMART_PULL_SUBCOMMAND], logger)
        .context("Failed to smart-pull repository")
}

/// Updates a remote's tracking refs, pruning refs deleted upstream.
pub fn remote_update_prune(repo: &Path, remote: &str, logger: GitLogger) -> anyhow::Result<()> {
    run_git_passthrough(repo, &["remote", "update", remote, "--prune"], logger)
        .with_context(|| format!("Failed to update remote '{}'", remote))
}
