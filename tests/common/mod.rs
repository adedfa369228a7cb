//! Test infrastructure for gityup integration tests.

// Shared across several test binaries; not every helper is used by each.
#![allow(dead_code)]

use anyhow::Result;
use gityup::git::{no_op_logger, run_git};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runs a git command against `repo` without logging.
pub fn git(repo: &Path, args: &[&str]) -> Result<String> {
    run_git(repo, args, no_op_logger)
}

/// Initializes a git repository at `path` with one commit on `branch`.
pub fn init_repo(path: &Path, branch: &str) -> Result<()> {
    std::fs::create_dir_all(path)?;
    git(path, &["init", "-b", branch])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "user.name", "Test User"])?;
    std::fs::write(path.join("README.md"), "# Test Repo\n")?;
    git(path, &["add", "README.md"])?;
    git(path, &["commit", "-m", "Initial commit"])?;
    Ok(())
}

/// Creates a bare repository at `bare`, wires it up as `remote_name` of
/// `repo`, and pushes the current branch with tracking configured.
pub fn add_remote(repo: &Path, remote_name: &str, bare: &Path) -> Result<()> {
    std::fs::create_dir_all(bare)?;
    git(bare, &["init", "--bare"])?;
    git(repo, &["remote", "add", remote_name, bare.to_str().unwrap()])?;
    let branch = git(repo, &["branch", "--show-current"])?;
    git(repo, &["push", "-u", remote_name, &branch])?;
    Ok(())
}

/// A temporary git repository for testing.
/// Automatically cleaned up when dropped.
pub struct TestRepo {
    _temp_dir: TempDir,
    _remote_dir: Option<TempDir>,
    path: PathBuf,
}

impl TestRepo {
    /// Creates a new test repository with an initial commit on the master branch.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();
        init_repo(&path, "master")?;

        Ok(Self {
            _temp_dir: temp_dir,
            _remote_dir: None,
            path,
        })
    }

    /// Creates a test repository tracking a bare `origin` remote. The remote
    /// lives in its own temp dir, kept alive for the fixture's lifetime.
    pub fn with_remote(branch: Option<&str>) -> Result<Self> {
        Self::with_named_remote("origin", branch)
    }

    /// Like `with_remote`, but the remote gets an arbitrary name.
    pub fn with_named_remote(remote_name: &str, branch: Option<&str>) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let remote_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();

        init_repo(&path, branch.unwrap_or("master"))?;
        add_remote(&path, remote_name, remote_dir.path())?;

        Ok(Self {
            _temp_dir: temp_dir,
            _remote_dir: Some(remote_dir),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Modifies a tracked file so the working tree is dirty.
    pub fn make_dirty(&self) -> Result<()> {
        std::fs::write(self.path.join("README.md"), "# Modified\n")?;
        Ok(())
    }

    /// Adds an untracked file without touching tracked content.
    pub fn make_untracked(&self) -> Result<()> {
        std::fs::write(self.path.join("untracked.txt"), "untracked\n")?;
        Ok(())
    }

    /// Detaches HEAD at the current commit.
    pub fn detach_head(&self) -> Result<()> {
        git(&self.path, &["checkout", "--detach", "HEAD"])?;
        Ok(())
    }
}

/// Installs a `git-smart-pull` stub into `dir` that fast-forwards from the
/// tracking branch. Lets tests exercise the sync path without the real
/// helper installed.
pub fn install_smart_pull_stub(dir: &Path) -> Result<()> {
    let script = dir.join("git-smart-pull");
    std::fs::write(&script, "#!/bin/sh\nexec git pull --ff-only\n")?;
    let mut perms = std::fs::metadata(&script)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms)?;
    Ok(())
}

/// Returns a PATH value with `stub_dir` prepended to the current search path,
/// for use as a child process environment.
pub fn path_with_stub(stub_dir: &Path) -> String {
    let current = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", stub_dir.display(), current)
}
