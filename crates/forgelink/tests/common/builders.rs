//! Builder for creating target repositories without repetitive boilerplate.

#![allow(dead_code)]

use forgelink::{GitProvider, ProviderConfig, TargetRepository};

/// Builder for creating `TargetRepository` instances.
pub struct TargetBuilder {
    owner: String,
    repo: String,
    branch: Option<String>,
    provider: Option<GitProvider>,
    base_url: Option<String>,
    api_token: Option<String>,
}

impl TargetBuilder {
    /// Create a GitHub target for `owner/repo`.
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: None,
            provider: None,
            base_url: None,
            api_token: None,
        }
    }

    pub fn provider(mut self, provider: GitProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn gitea(self, base_url: &str) -> Self {
        self.provider(GitProvider::Gitea).base_url(base_url)
    }

    pub fn forgejo(self, base_url: &str) -> Self {
        self.provider(GitProvider::Forgejo).base_url(base_url)
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn token(mut self, token: &str) -> Self {
        self.api_token = Some(token.to_string());
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    pub fn build(self) -> TargetRepository {
        let mut target = TargetRepository::new(self.owner, self.repo);
        target.branch = self.branch;

        if let Some(provider) = self.provider {
            let mut config = ProviderConfig::new(provider);
            config.base_url = self.base_url;
            if let Some(token) = self.api_token {
                config = config.with_api_token(token);
            }
            target.provider = Some(config);
        }

        target
    }
}
