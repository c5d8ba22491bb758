//! Git credential configuration per provider.

use std::collections::BTreeMap;

use url::Url;

use crate::error::ProviderError;
use crate::repository::TargetRepository;
use crate::resolve::{is_github_provider, resolve_api_base_url};

/// Credential helper that reads tokens stored by `git credential-store`.
pub const CREDENTIAL_HELPER: &str = "store";

/// Git config entries selecting a credential helper for the repository.
///
/// GitHub gets the global `credential.helper`; self-hosted providers get an
/// entry scoped to the host of their API base URL.
pub fn credential_config(
    repo: &TargetRepository,
) -> Result<BTreeMap<String, String>, ProviderError> {
    let mut config = BTreeMap::new();

    if is_github_provider(repo) {
        config.insert("credential.helper".to_string(), CREDENTIAL_HELPER.to_string());
        return Ok(config);
    }

    let api_base = resolve_api_base_url(repo);
    let hostname = extract_hostname(&api_base)?;
    log::debug!("Scoping credential helper to host {}", hostname);

    config.insert(
        format!("credential.{}.helper", hostname),
        CREDENTIAL_HELPER.to_string(),
    );
    Ok(config)
}

fn extract_hostname(base_url: &str) -> Result<String, ProviderError> {
    let parsed = Url::parse(base_url).map_err(|e| ProviderError::MalformedBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    parsed
        .host_str()
        .map(str::to_string)
        .ok_or_else(|| ProviderError::MalformedBaseUrl {
            url: base_url.to_string(),
            reason: "URL has no host".to_string(),
        })
}
