//! Git working copy wrapper.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, trace};

use crate::{GitError, MetadataSource, RepositoryMetadata, Result};

/// A git working copy queried through the `git` executable.
#[derive(Debug, Clone)]
pub struct GitRepository {
    /// Directory the commands run in.
    workdir: PathBuf,
    /// Path to git binary, if it was found.
    git_path: Option<PathBuf>,
}

impl GitRepository {
    /// Create a repository handle for `workdir`.
    ///
    /// Verifies that git is available in PATH.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotFound` if git is not available.
    pub fn new(workdir: impl Into<PathBuf>) -> Result<Self> {
        let git_path = Self::find_git()?;
        debug!(path = %git_path.display(), "git found");
        Ok(Self {
            workdir: workdir.into(),
            git_path: Some(git_path),
        })
    }

    /// Create a repository handle without failing when git is missing.
    ///
    /// A missing git binary is reported by [`MetadataSource::query`] instead.
    pub fn open(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            git_path: Self::find_git().ok(),
        }
    }

    /// Check if git is available in PATH.
    pub fn is_available() -> bool {
        Self::find_git().is_ok()
    }

    /// The directory git commands run in.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn find_git() -> Result<PathBuf> {
        which::which("git").map_err(|_| GitError::NotFound)
    }

    /// Run a git command and return the raw output.
    fn run_git(&self, args: &[&str]) -> Result<Output> {
        let git = self.git_path.as_ref().ok_or(GitError::NotFound)?;
        trace!(args = ?args, workdir = %self.workdir.display(), "running git command");
        let output = Command::new(git)
            .args(args)
            .current_dir(&self.workdir)
            .output()?;
        trace!(
            status = %output.status,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "git command completed"
        );
        Ok(output)
    }

    /// Run a git command, check for success and return trimmed stdout.
    fn run_git_checked(&self, args: &[&str]) -> Result<String> {
        let output = self.run_git(args)?;
        let command = args.join(" ");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::CommandFailed { command, stderr });
        }

        String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .map_err(|_| GitError::InvalidOutput(command))
    }

    /// Abbreviated id of HEAD.
    pub fn commit_hash(&self) -> Result<String> {
        self.run_git_checked(&["rev-parse", "--short", "HEAD"])
    }

    /// Name of the checked-out branch, `HEAD` when detached.
    pub fn branch(&self) -> Result<String> {
        self.run_git_checked(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// Committer date of the last commit, e.g. `2024-05-01 10:00:00 +0000`.
    pub fn commit_date(&self) -> Result<String> {
        self.run_git_checked(&["log", "-1", "--format=%cd", "--date=iso"])
    }

    /// Full message of the last commit.
    pub fn commit_message(&self) -> Result<String> {
        self.run_git_checked(&["log", "-1", "--pretty=%B"])
    }
}

impl MetadataSource for GitRepository {
    fn query(&self) -> Result<RepositoryMetadata> {
        debug!(workdir = %self.workdir.display(), "querying repository metadata");
        Ok(RepositoryMetadata {
            commit_hash: self.commit_hash()?,
            branch: self.branch()?,
            commit_date: self.commit_date()?,
            commit_message: self.commit_message()?,
        })
    }
}
