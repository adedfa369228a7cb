//! Bulk git repository synchronizer.
//!
//! This crate updates a directory full of git clones by:
//! - Scanning the root's immediate children for repositories
//! - Checking each one is safe to sync (clean tree, branch checked out,
//!   remote configured for that branch)
//! - Running `git smart-pull` followed by a pruning remote update

pub mod args;
pub mod config;
pub mod constants;
pub mod deps;
pub mod git;
pub mod output;
pub mod repo;
