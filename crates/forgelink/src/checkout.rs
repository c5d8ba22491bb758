//! Where a target repository is checked out and how to clone it there.

use std::path::PathBuf;

use crate::error::ProviderError;
use crate::repository::TargetRepository;
use crate::urls::clone_url;

/// Root under which sandboxes keep their checkouts.
pub const SANDBOX_ROOT_DIR: &str = "/home/daytona";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLayout {
    pub root: PathBuf,
    /// When set, every repository lives in this directory (local mode).
    pub local_working_dir: Option<PathBuf>,
}

impl Default for CheckoutLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from(SANDBOX_ROOT_DIR),
            local_working_dir: None,
        }
    }
}

impl CheckoutLayout {
    /// Creates a layout that checks repositories out under `root`.
    ///
    /// # Arguments
    /// * `root` - Directory holding one subdirectory per repository
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            local_working_dir: None,
        }
    }

    /// Local mode: the working directory is used as-is for every repository.
    pub fn local(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            local_working_dir: Some(working_dir.into()),
            ..Self::default()
        }
    }

    /// Checkout directory for `repo`.
    ///
    /// # Errors
    /// Returns [`ProviderError::MissingRepositoryName`] outside local mode when
    /// the repository name is blank.
    pub fn repo_absolute_path(&self, repo: &TargetRepository) -> Result<PathBuf, ProviderError> {
        if let Some(dir) = &self.local_working_dir {
            return Ok(dir.clone());
        }

        if repo.repo.trim().is_empty() {
            return Err(ProviderError::MissingRepositoryName);
        }

        Ok(self.root.join(&repo.repo))
    }

    /// `git clone [--branch <branch>] <clone_url> <path>`
    pub fn git_clone_command(
        &self,
        repo: &TargetRepository,
    ) -> Result<Vec<String>, ProviderError> {
        let path = self.repo_absolute_path(repo)?;

        let mut command = vec!["git".to_string(), "clone".to_string()];
        if let Some(branch) = repo.branch.as_deref().filter(|b| !b.is_empty()) {
            command.push("--branch".to_string());
            command.push(branch.to_string());
        }
        command.push(clone_url(repo));
        command.push(path.display().to_string());
        Ok(command)
    }
}
