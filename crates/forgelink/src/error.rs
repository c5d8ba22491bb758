use std::path::PathBuf;
use thiserror::Error;

use crate::provider::GitProvider;

#[derive(Error, Debug)]
pub enum ForgelinkError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Base URL and API token are required for {provider} provider")]
    MissingCredentials { provider: GitProvider },

    #[error("Unsupported Git provider: {0}")]
    UnsupportedProvider(String),

    #[error("Malformed base URL '{url}': {reason}")]
    MalformedBaseUrl { url: String, reason: String },

    #[error("No repository name provided")]
    MissingRepositoryName,

    #[error("No repository owner provided")]
    MissingOwner,
}

impl ProviderError {
    /// Returns true if the error points at a bad provider setup rather than bad repository data.
    pub fn is_caller_bug(&self) -> bool {
        matches!(
            self,
            ProviderError::UnsupportedProvider(_) | ProviderError::MissingCredentials { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read target file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse target JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Failed to parse target YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),

    #[error("Unsupported target file format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Target validation failed: {0}")]
    Validation(#[from] ProviderError),
}

pub type Result<T> = std::result::Result<T, ForgelinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_caller_bug() {
        assert!(ProviderError::UnsupportedProvider("gitlab".to_string()).is_caller_bug());
        assert!(ProviderError::MissingCredentials {
            provider: GitProvider::Gitea
        }
        .is_caller_bug());
        assert!(!ProviderError::MissingRepositoryName.is_caller_bug());
        assert!(!ProviderError::MalformedBaseUrl {
            url: "x".to_string(),
            reason: "y".to_string()
        }
        .is_caller_bug());
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: ForgelinkError = ProviderError::MissingOwner.into();
        assert_eq!(err.to_string(), "Provider error: No repository owner provided");
    }
}
