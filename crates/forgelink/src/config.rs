//! Loading target repository descriptors from JSON or YAML files.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::provider::{GitProvider, ProviderConfig};
use crate::repository::TargetRepository;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescriptor {
    pub owner: String,
    pub repo: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub base_commit: Option<String>,
    #[serde(default)]
    pub provider: Option<ProviderDescriptor>,
}

/// Provider block of a descriptor. `apiToken` is optional here; callers that
/// keep the token elsewhere attach it after loading.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    #[serde(rename = "type")]
    pub provider_type: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default, alias = "token")]
    pub api_token: Option<String>,
    #[serde(default)]
    pub mcp_server_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Json,
    Yaml,
}

impl DescriptorFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => Ok(DescriptorFormat::Json),
            "yaml" | "yml" => Ok(DescriptorFormat::Yaml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

pub fn load_target<P: AsRef<Path>>(path: P) -> Result<TargetRepository, ConfigError> {
    let path = path.as_ref();
    let format = DescriptorFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "Loading target descriptor");
    load_target_from_str(&content, format)
}

pub fn load_target_from_str(
    content: &str,
    format: DescriptorFormat,
) -> Result<TargetRepository, ConfigError> {
    let descriptor: TargetDescriptor = match format {
        DescriptorFormat::Json => serde_json::from_str(content)?,
        DescriptorFormat::Yaml => serde_yaml::from_str(content)?,
    };

    descriptor.into_target()
}

impl TargetDescriptor {
    /// Parses the provider type and validates the result.
    pub fn into_target(self) -> Result<TargetRepository, ConfigError> {
        let provider = self.provider.map(ProviderDescriptor::into_config).transpose()?;

        let target = TargetRepository {
            owner: self.owner,
            repo: self.repo,
            branch: self.branch,
            base_commit: self.base_commit,
            provider,
        };
        target.validate()?;
        Ok(target)
    }
}

impl ProviderDescriptor {
    pub fn into_config(self) -> Result<ProviderConfig, ConfigError> {
        let provider_type: GitProvider = self.provider_type.parse()?;
        let mut config = ProviderConfig::new(provider_type);
        config.base_url = self.base_url;
        config.tool_server_name = self.mcp_server_name;
        if let Some(token) = self.api_token.filter(|t| !t.is_empty()) {
            config = config.with_api_token(token);
        }
        Ok(config)
    }
}
