//! Everything derivable from a target repository in one value.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::credentials::credential_config;
use crate::error::{ProviderError, Result};
use crate::provider::GitProvider;
use crate::repository::TargetRepository;
use crate::resolve::{resolve_api_base_url, resolve_provider, resolve_web_base_url};
use crate::tool_server::{build_tool_server_config, tool_server_name, ToolServerInvocation};
use crate::urls::{api_resource_url, clone_url, web_url};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub provider: GitProvider,
    pub api_base_url: String,
    pub web_base_url: String,
    pub clone_url: String,
    pub web_url: String,
    pub api_url: String,
    pub credential_config: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_server: Option<NamedToolServer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedToolServer {
    pub name: String,
    #[serde(flatten)]
    pub invocation: ToolServerInvocation,
}

/// Builds a [`RepositorySummary`].
///
/// The tool server is only included when the provider config carries a
/// non-empty base URL and token; otherwise it is omitted rather than failing.
///
/// # Arguments
/// * `repo` - Target repository; it is validated before anything is derived.
pub fn summarize(repo: &TargetRepository) -> Result<RepositorySummary> {
    repo.validate()?;
    let provider = resolve_provider(repo);

    let tool_server = match &repo.provider {
        Some(config) => match build_tool_server_config(config) {
            Ok(invocation) => invocation.map(|invocation| NamedToolServer {
                name: config
                    .tool_server_name
                    .clone()
                    .unwrap_or_else(|| tool_server_name(provider)),
                invocation,
            }),
            Err(ProviderError::MissingCredentials { .. }) => None,
            Err(e) => return Err(e.into()),
        },
        None => None,
    };

    Ok(RepositorySummary {
        provider,
        api_base_url: resolve_api_base_url(repo),
        web_base_url: resolve_web_base_url(repo),
        clone_url: clone_url(repo),
        web_url: web_url(repo),
        api_url: api_resource_url(repo),
        credential_config: credential_config(repo)?,
        tool_server,
    })
}
