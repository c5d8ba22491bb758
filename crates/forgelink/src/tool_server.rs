//! MCP tool-server definitions for self-hosted providers.
//!
//! Each self-hosted provider ships a static command template carrying
//! `${<PROVIDER>_BASE_URL}` and `${<PROVIDER>_TOKEN}` placeholders. Building a
//! config copies the template and fills the placeholders with the caller's
//! base URL and API token. GitHub has no tool server.

use std::collections::BTreeMap;

use secrecy::ExposeSecret;
use serde::Serialize;

use crate::error::ProviderError;
use crate::provider::{GitProvider, ProviderConfig};

/// Static launch template for a provider's tool server.
#[derive(Debug, PartialEq, Eq)]
pub struct ToolServerTemplate {
    pub command: &'static str,
    pub args: &'static [&'static str],
    pub env: &'static [(&'static str, &'static str)],
}

pub static GITEA_TOOL_SERVER_TEMPLATE: ToolServerTemplate = ToolServerTemplate {
    command: "npx",
    args: &[
        "-y",
        "gitea-mcp-server",
        "--url",
        "${GITEA_BASE_URL}",
        "--token",
        "${GITEA_TOKEN}",
    ],
    env: &[
        ("GITEA_BASE_URL", "${GITEA_BASE_URL}"),
        ("GITEA_ACCESS_TOKEN", "${GITEA_TOKEN}"),
    ],
};

pub static FORGEJO_TOOL_SERVER_TEMPLATE: ToolServerTemplate = ToolServerTemplate {
    command: "npx",
    args: &[
        "-y",
        "forgejo-mcp-server",
        "--url",
        "${FORGEJO_BASE_URL}",
        "--token",
        "${FORGEJO_TOKEN}",
    ],
    env: &[
        ("FORGEJO_BASE_URL", "${FORGEJO_BASE_URL}"),
        ("FORGEJO_ACCESS_TOKEN", "${FORGEJO_TOKEN}"),
    ],
};

/// Template for a provider, `None` when the provider has no tool server.
pub fn template_for(provider: GitProvider) -> Option<&'static ToolServerTemplate> {
    match provider {
        GitProvider::Github => None,
        GitProvider::Gitea => Some(&GITEA_TOOL_SERVER_TEMPLATE),
        GitProvider::Forgejo => Some(&FORGEJO_TOOL_SERVER_TEMPLATE),
    }
}

/// Filled-in command ready to hand to a process launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolServerInvocation {
    pub command: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
}

impl ToolServerTemplate {
    /// Copies the template, replacing every `${NAME}` found in `replacements`.
    pub fn instantiate(&self, replacements: &BTreeMap<String, String>) -> ToolServerInvocation {
        let args = self
            .args
            .iter()
            .map(|arg| substitute_placeholders(arg, replacements))
            .collect();

        let env = if self.env.is_empty() {
            None
        } else {
            Some(
                self.env
                    .iter()
                    .map(|(key, value)| {
                        (key.to_string(), substitute_placeholders(value, replacements))
                    })
                    .collect(),
            )
        };

        ToolServerInvocation {
            command: self.command.to_string(),
            args,
            env,
        }
    }
}

/// Replaces exact `${NAME}` tokens whose NAME is a key of `replacements`.
///
/// Scans left to right in a single pass, so substituted values are never
/// rescanned. Unknown or unterminated placeholders are kept verbatim. A name
/// runs up to the first `}`, so a nested `${${A}}` names `${A` and is kept
/// as-is rather than resolving the inner token.
///
/// # Arguments
/// * `input` - Template string, e.g. `--url=${GITEA_BASE_URL}`
/// * `replacements` - Placeholder name (without `${}`) to literal value
pub fn substitute_placeholders(input: &str, replacements: &BTreeMap<String, String>) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        match after_open.find('}') {
            Some(end) => {
                let name = &after_open[..end];
                match replacements.get(name) {
                    Some(value) => output.push_str(value),
                    None => output.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after_open[end + 1..];
            }
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    output.push_str(rest);
    output
}

/// Placeholder names for a provider, e.g. `GITEA_BASE_URL` and `GITEA_TOKEN`.
pub fn placeholder_replacements(
    provider: GitProvider,
    base_url: &str,
    api_token: &str,
) -> BTreeMap<String, String> {
    let prefix = provider.as_str().to_uppercase();
    BTreeMap::from([
        (format!("{}_BASE_URL", prefix), base_url.to_string()),
        (format!("{}_TOKEN", prefix), api_token.to_string()),
    ])
}

/// Builds the tool-server invocation for a provider config.
///
/// Returns `Ok(None)` for GitHub. Self-hosted providers need both a base URL
/// and an API token.
pub fn build_tool_server_config(
    config: &ProviderConfig,
) -> Result<Option<ToolServerInvocation>, ProviderError> {
    let provider = config.provider_type;
    if provider == GitProvider::Github {
        return Ok(None);
    }

    let base_url = config.base_url.as_deref().filter(|url| !url.is_empty());
    let api_token = config
        .api_token
        .as_ref()
        .map(|token| token.expose_secret())
        .filter(|token| !token.is_empty());

    let (Some(base_url), Some(api_token)) = (base_url, api_token) else {
        return Err(ProviderError::MissingCredentials { provider });
    };

    let template = template_for(provider)
        .ok_or_else(|| ProviderError::UnsupportedProvider(provider.to_string()))?;

    tracing::debug!(
        provider = %provider,
        base_url = %base_url,
        "Building tool server config"
    );

    let replacements = placeholder_replacements(provider, base_url, api_token);
    Ok(Some(template.instantiate(&replacements)))
}

/// Display name of a provider's tool server, e.g. `gitea-mcp`.
pub fn tool_server_name(provider: GitProvider) -> String {
    format!("{}-mcp", provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let replacements = vars(&[("A", "1")]);
        assert_eq!(substitute_placeholders("${A}-${A}", &replacements), "1-1");
    }

    #[test]
    fn test_substitute_keeps_unknown_placeholders() {
        let replacements = vars(&[("A", "1")]);
        assert_eq!(substitute_placeholders("${B}/${A}", &replacements), "${B}/1");
        assert_eq!(substitute_placeholders("$A", &replacements), "$A");
    }

    #[test]
    fn test_substitute_unterminated_placeholder() {
        let replacements = vars(&[("A", "1")]);
        assert_eq!(substitute_placeholders("${A}${A", &replacements), "1${A");
    }

    #[test]
    fn test_substitute_nested_placeholder_kept_verbatim() {
        let replacements = vars(&[("A", "1")]);
        assert_eq!(substitute_placeholders("${${A}}", &replacements), "${${A}}");
        assert_eq!(substitute_placeholders("${${A}}${A}", &replacements), "${${A}}1");
    }

    #[test]
    fn test_substitute_is_case_sensitive() {
        let replacements = vars(&[("GITEA_TOKEN", "t")]);
        assert_eq!(substitute_placeholders("${gitea_token}", &replacements), "${gitea_token}");
    }

    #[test]
    fn test_substitute_does_not_rescan_values() {
        let replacements = vars(&[("GITEA_BASE_URL", "${GITEA_TOKEN}"), ("GITEA_TOKEN", "t")]);
        assert_eq!(
            substitute_placeholders("${GITEA_BASE_URL}", &replacements),
            "${GITEA_TOKEN}"
        );
    }

    #[test]
    fn test_placeholder_names_are_uppercased() {
        let replacements = placeholder_replacements(GitProvider::Forgejo, "u", "t");
        assert_eq!(replacements.get("FORGEJO_BASE_URL").map(String::as_str), Some("u"));
        assert_eq!(replacements.get("FORGEJO_TOKEN").map(String::as_str), Some("t"));
    }

    #[test]
    fn test_templates_registered_for_self_hosted_only() {
        assert!(template_for(GitProvider::Github).is_none());
        assert_eq!(template_for(GitProvider::Gitea), Some(&GITEA_TOOL_SERVER_TEMPLATE));
        assert_eq!(template_for(GitProvider::Forgejo), Some(&FORGEJO_TOOL_SERVER_TEMPLATE));
    }

    #[test]
    fn test_github_has_no_tool_server() {
        let config = ProviderConfig::new(GitProvider::Github)
            .with_base_url("https://api.github.com")
            .with_api_token("ghp_token");
        assert_eq!(build_tool_server_config(&config).unwrap(), None);
        assert_eq!(
            build_tool_server_config(&ProviderConfig::new(GitProvider::Github)).unwrap(),
            None
        );
    }

    #[test]
    fn test_missing_base_url() {
        let config = ProviderConfig::new(GitProvider::Gitea).with_api_token("t");
        let err = build_tool_server_config(&config).unwrap_err();
        assert_eq!(err, ProviderError::MissingCredentials { provider: GitProvider::Gitea });
        assert!(err.to_string().contains("Base URL and API token are required"));
    }

    #[test]
    fn test_missing_api_token() {
        let config =
            ProviderConfig::new(GitProvider::Gitea).with_base_url("https://git.example.com");
        assert!(matches!(
            build_tool_server_config(&config),
            Err(ProviderError::MissingCredentials { .. })
        ));
    }

    #[test]
    fn test_empty_api_token_counts_as_missing() {
        let config = ProviderConfig::new(GitProvider::Forgejo)
            .with_base_url("https://forge.example.com")
            .with_api_token("");
        assert!(build_tool_server_config(&config).is_err());
    }

    #[test]
    fn test_gitea_invocation() {
        let config = ProviderConfig::new(GitProvider::Gitea)
            .with_base_url("https://git.example.com")
            .with_api_token("tok");
        let invocation = build_tool_server_config(&config).unwrap().unwrap();

        assert_eq!(invocation.command, "npx");
        assert!(invocation.args.contains(&"gitea-mcp-server".to_string()));
        assert!(invocation.args.contains(&"https://git.example.com".to_string()));
        assert!(invocation.args.contains(&"tok".to_string()));
        assert!(invocation.args.iter().all(|arg| !arg.contains("${")));

        let env = invocation.env.unwrap();
        assert_eq!(env.get("GITEA_BASE_URL").map(String::as_str), Some("https://git.example.com"));
        assert_eq!(env.get("GITEA_ACCESS_TOKEN").map(String::as_str), Some("tok"));
    }

    #[test]
    fn test_forgejo_invocation() {
        let config = ProviderConfig::new(GitProvider::Forgejo)
            .with_base_url("https://forge.example.com")
            .with_api_token("forge-token");
        let invocation = build_tool_server_config(&config).unwrap().unwrap();

        assert!(invocation.args.contains(&"forgejo-mcp-server".to_string()));
        assert!(invocation.args.contains(&"https://forge.example.com".to_string()));
        assert!(invocation.args.contains(&"forge-token".to_string()));
        assert!(invocation
            .env
            .unwrap()
            .values()
            .all(|value| !value.contains("${")));
    }

    #[test]
    fn test_instantiate_leaves_template_untouched() {
        let replacements = placeholder_replacements(GitProvider::Gitea, "u", "t");
        let _ = GITEA_TOOL_SERVER_TEMPLATE.instantiate(&replacements);
        assert_eq!(GITEA_TOOL_SERVER_TEMPLATE.args[3], "${GITEA_BASE_URL}");
    }

    #[test]
    fn test_tool_server_name() {
        assert_eq!(tool_server_name(GitProvider::Gitea), "gitea-mcp");
        assert_eq!(tool_server_name(GitProvider::Forgejo), "forgejo-mcp");
        assert_eq!(tool_server_name(GitProvider::Github), "github-mcp");
    }
}
