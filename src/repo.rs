// Repository detection, guard chain, sync logic

use crate::config::Config;
use crate::constants::GIT_DIR;
use crate::git;
use crate::output;
use std::path::{Path, PathBuf};

/// Why a repository was skipped instead of synced.
///
/// Skips are normal control flow, not errors: each produces one report line
/// and the loop moves on to the next candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Working tree has modified, staged, or untracked files.
    LocalChanges,
    /// HEAD is not on a branch.
    DetachedHead,
    /// No remote configured for the checked-out branch.
    NoRemote,
}

/// Outcome of the guard chain for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncDecision {
    Sync { branch: String, remote: String },
    Skip(SkipReason),
}

pub fn is_git_repo(path: &Path) -> bool {
    path.join(GIT_DIR).is_dir()
}

/// Lists immediate child directories of `root` that are git repositories,
/// in filesystem enumeration order. Non-directories and plain directories
/// are silently skipped.
pub fn find_git_repos(root: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(root)
        .into_iter()
        .flatten()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir() && is_git_repo(&e.path()))
        .map(|e| e.path())
        .collect()
}

/// Runs the guard chain for one repository, in strict order: clean tree,
/// branch checked out, remote configured. The first failing guard wins.
///
/// Every guard is fail-closed: a query that errors at the subprocess level
/// folds into that guard's skip outcome. Ambiguous state means skip, never
/// sync. Fatal aborts are reserved for the sync step.
pub fn evaluate(repo: &Path, config: &Config) -> SyncDecision {
    let logger = config.git_logger();

    if !git::status_clean(repo, logger).unwrap_or(false) {
        return SyncDecision::Skip(SkipReason::LocalChanges);
    }

    let branch = git::current_branch(repo, logger).unwrap_or_default();
    if branch.is_empty() {
        return SyncDecision::Skip(SkipReason::DetachedHead);
    }

    match git::branch_remote(repo, &branch, logger) {
        Some(remote) => SyncDecision::Sync { branch, remote },
        None => SyncDecision::Skip(SkipReason::NoRemote),
    }
}

/// Synchronizes one repository: smart-pull, then a pruning update of the
/// remote the guard chain resolved for the current branch. Both subprocesses
/// run in sequence against `repo` as the working directory; a non-zero exit
/// from either aborts the entire run.
pub fn sync(repo: &Path, remote: &str, config: &Config) -> anyhow::Result<()> {
    let logger = config.git_logger();
    git::smart_pull(repo, logger)?;
    git::remote_update_prune(repo, remote, logger)?;
    Ok(())
}

/// Processes every repository under `root` sequentially: evaluate the guard
/// chain, then either print the skip reason or sync. Guard skips continue
/// the loop; a sync failure propagates and ends the run.
pub fn update_projects(root: &Path, config: &Config) -> anyhow::Result<()> {
    for repo in find_git_repos(root) {
        match evaluate(&repo, config) {
            SyncDecision::Skip(reason) => output::print_skip(&repo, reason),
            SyncDecision::Sync { remote, .. } => {
                output::print_pull_header(&repo);
                sync(&repo, &remote, config)?;
                println!();
            }
        }
    }
    Ok(())
}
