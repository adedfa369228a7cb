//! Colored one-line reporting.
//!
//! Each skipped repository and each attempted sync produces exactly one line
//! on stdout. Hash decoration marks sync headers apart from plain skip lines;
//! there are no log levels and no structured output.

use crate::config::Config;
use crate::repo::SkipReason;
use colored::Colorize;
use std::path::Path;

/// Prints the root directory header. Suppressed in quiet mode.
pub fn print_working_dir(path: &Path, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!(
        "{} {}",
        "Working in:".cyan(),
        path.display().to_string().white().bold()
    )
}

/// Prints the single skip line for a repository the guard chain rejected.
pub fn print_skip(repo: &Path, reason: SkipReason) {
    match reason {
        SkipReason::LocalChanges => {
            println!(
                "{}",
                format!("local changes detected, skipping {}", repo.display()).yellow()
            )
        }
        SkipReason::DetachedHead => {
            println!("{}", "#### detached HEAD state, skipping ####".yellow())
        }
        SkipReason::NoRemote => {
            println!(
                "{}",
                format!("no remote to pull from, skipping {}", repo.display()).yellow()
            )
        }
    }
}

/// Prints the sync header; the pull subprocesses' own output follows it.
pub fn print_pull_header(repo: &Path) {
    println!(
        "{}",
        format!("#### pulling {} ####", repo.display()).cyan().bold()
    )
}
