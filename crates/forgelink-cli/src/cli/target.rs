use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use forgelink::{load_target, GitProvider, ProviderConfig, TargetRepository};

/// Where the target repository comes from: a descriptor file or flags.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// JSON or YAML target descriptor
    #[arg(
        long = "target",
        value_name = "FILE",
        conflicts_with_all = ["owner", "repo", "branch", "provider", "base_url"]
    )]
    pub target_file: Option<PathBuf>,

    /// Repository owner
    #[arg(long, required_unless_present = "target_file")]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long, required_unless_present = "target_file")]
    pub repo: Option<String>,

    /// Branch to check out
    #[arg(long)]
    pub branch: Option<String>,

    /// Git provider: github, gitea or forgejo (default: github)
    #[arg(long)]
    pub provider: Option<String>,

    /// Base URL of a self-hosted instance
    #[arg(long)]
    pub base_url: Option<String>,

    /// API token for the provider; fills in a descriptor that has none
    #[arg(long, env = "FORGELINK_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl TargetArgs {
    pub fn resolve(self) -> Result<TargetRepository> {
        if let Some(path) = &self.target_file {
            let mut target = load_target(path)
                .with_context(|| format!("Failed to load target from {}", path.display()))?;
            if let Some(token) = self.token {
                if target.provider.is_none() {
                    tracing::warn!("--token is ignored for a target without a provider");
                }
                target.provider = target.provider.map(|config| {
                    if config.api_token.is_some() {
                        config
                    } else {
                        config.with_api_token(token.clone())
                    }
                });
            }
            return Ok(target);
        }

        let mut target = TargetRepository::new(
            self.owner.unwrap_or_default(),
            self.repo.unwrap_or_default(),
        );
        target.branch = self.branch;

        if let Some(name) = self.provider {
            let provider: GitProvider = name.parse()?;
            let mut config = ProviderConfig::new(provider);
            config.base_url = self.base_url;
            if let Some(token) = self.token {
                config = config.with_api_token(token);
            }
            target.provider = Some(config);
        } else if self.base_url.is_some() {
            tracing::warn!("--base-url is ignored without --provider");
        }

        target.validate()?;
        Ok(target)
    }
}
