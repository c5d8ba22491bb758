//! Target repository reference.

use serde::Serialize;

use crate::error::ProviderError;
use crate::provider::ProviderConfig;

/// Repository an agent works against. A missing `provider` means GitHub.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRepository {
    pub owner: String,
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderConfig>,
}

impl TargetRepository {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: None,
            base_commit: None,
            provider: None,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_base_commit(mut self, commit: impl Into<String>) -> Self {
        self.base_commit = Some(commit.into());
        self
    }

    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Checks that both owner and repository name are present.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.owner.trim().is_empty() {
            return Err(ProviderError::MissingOwner);
        }
        if self.repo.trim().is_empty() {
            return Err(ProviderError::MissingRepositoryName);
        }
        Ok(())
    }

    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
