//! Supported Git hosting providers and their default configuration.

use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Git hosting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitProvider {
    Github,
    Gitea,
    Forgejo,
}

impl GitProvider {
    pub const ALL: [GitProvider; 3] = [
        GitProvider::Github,
        GitProvider::Gitea,
        GitProvider::Forgejo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GitProvider::Github => "github",
            GitProvider::Gitea => "gitea",
            GitProvider::Forgejo => "forgejo",
        }
    }

    /// Gitea and Forgejo run on operator-supplied hosts; GitHub does not.
    pub fn is_self_hosted(&self) -> bool {
        matches!(self, GitProvider::Gitea | GitProvider::Forgejo)
    }
}

impl fmt::Display for GitProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GitProvider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(GitProvider::Github),
            "gitea" => Ok(GitProvider::Gitea),
            "forgejo" => Ok(GitProvider::Forgejo),
            other => Err(ProviderError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// Provider selection for a target repository.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(rename = "type")]
    pub provider_type: GitProvider,

    /// Base URL of a self-hosted instance, with or without the API path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Never serialized.
    #[serde(skip_serializing)]
    pub api_token: Option<SecretString>,

    #[serde(rename = "mcpServerName", skip_serializing_if = "Option::is_none")]
    pub tool_server_name: Option<String>,
}

impl ProviderConfig {
    pub fn new(provider_type: GitProvider) -> Self {
        Self {
            provider_type,
            base_url: None,
            api_token: None,
            tool_server_name: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecretString::from(token.into()));
        self
    }

    pub fn with_tool_server_name(mut self, name: impl Into<String>) -> Self {
        self.tool_server_name = Some(name.into());
        self
    }
}

/// Built-in defaults for a provider.
#[derive(Debug, PartialEq, Eq)]
pub struct ProviderDefaults {
    pub provider: GitProvider,
    pub base_url: Option<&'static str>,
    pub tool_server_name: Option<&'static str>,
}

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_WEB_URL: &str = "https://github.com";

static DEFAULTS: [ProviderDefaults; 3] = [
    ProviderDefaults {
        provider: GitProvider::Github,
        base_url: Some(GITHUB_API_URL),
        tool_server_name: None,
    },
    ProviderDefaults {
        provider: GitProvider::Gitea,
        base_url: None,
        tool_server_name: Some("gitea-mcp"),
    },
    ProviderDefaults {
        provider: GitProvider::Forgejo,
        base_url: None,
        tool_server_name: Some("forgejo-mcp"),
    },
];

impl ProviderDefaults {
    pub fn for_provider(provider: GitProvider) -> &'static ProviderDefaults {
        match provider {
            GitProvider::Github => &DEFAULTS[0],
            GitProvider::Gitea => &DEFAULTS[1],
            GitProvider::Forgejo => &DEFAULTS[2],
        }
    }

    pub fn default_config(&self) -> ProviderConfig {
        ProviderConfig {
            provider_type: self.provider,
            base_url: self.base_url.map(str::to_string),
            api_token: None,
            tool_server_name: self.tool_server_name.map(str::to_string),
        }
    }
}
