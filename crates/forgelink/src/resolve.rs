//! Provider resolution for a target repository.
//!
//! Base URL policy for self-hosted providers: the API base always ends in
//! `/api/v1` (appended when the configured URL lacks it), and the web base is
//! the configured URL with a trailing `/api/v1` or `/api` removed. Every URL
//! builder derives from these two functions.

use crate::provider::{GitProvider, GITHUB_API_URL, GITHUB_WEB_URL};
use crate::repository::TargetRepository;

/// Fallback host for self-hosted providers without a configured base URL.
pub const SELF_HOSTED_DEFAULT_URL: &str = "http://localhost:3000";

/// API path served by Gitea and Forgejo.
pub const SELF_HOSTED_API_PATH: &str = "/api/v1";

/// Provider for the repository, GitHub when none is configured.
pub fn resolve_provider(repo: &TargetRepository) -> GitProvider {
    repo.provider
        .as_ref()
        .map(|p| p.provider_type)
        .unwrap_or(GitProvider::Github)
}

pub fn is_github_provider(repo: &TargetRepository) -> bool {
    resolve_provider(repo) == GitProvider::Github
}

pub fn is_self_hosted_provider(repo: &TargetRepository) -> bool {
    resolve_provider(repo).is_self_hosted()
}

/// API origin used for REST calls against the repository's provider.
pub fn resolve_api_base_url(repo: &TargetRepository) -> String {
    match resolve_provider(repo) {
        GitProvider::Github => GITHUB_API_URL.to_string(),
        provider => match configured_base_url(repo) {
            Some(base) => with_api_path(base),
            None => {
                tracing::warn!(
                    provider = %provider,
                    "No base URL configured, falling back to {}",
                    SELF_HOSTED_DEFAULT_URL
                );
                format!("{}{}", SELF_HOSTED_DEFAULT_URL, SELF_HOSTED_API_PATH)
            }
        },
    }
}

/// Browsable origin of the repository's provider.
pub fn resolve_web_base_url(repo: &TargetRepository) -> String {
    match resolve_provider(repo) {
        GitProvider::Github => GITHUB_WEB_URL.to_string(),
        provider => match configured_base_url(repo) {
            Some(base) => strip_api_path(base).to_string(),
            None => {
                tracing::warn!(
                    provider = %provider,
                    "No base URL configured, falling back to {}",
                    SELF_HOSTED_DEFAULT_URL
                );
                SELF_HOSTED_DEFAULT_URL.to_string()
            }
        },
    }
}

fn configured_base_url(repo: &TargetRepository) -> Option<&str> {
    repo.provider
        .as_ref()?
        .base_url
        .as_deref()
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
}

fn with_api_path(base: &str) -> String {
    if base.ends_with(SELF_HOSTED_API_PATH) {
        base.to_string()
    } else if base.ends_with("/api") {
        format!("{}/v1", base)
    } else {
        format!("{}{}", base, SELF_HOSTED_API_PATH)
    }
}

fn strip_api_path(base: &str) -> &str {
    base.strip_suffix(SELF_HOSTED_API_PATH)
        .or_else(|| base.strip_suffix("/api"))
        .unwrap_or(base)
}
