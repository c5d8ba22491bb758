//! Resolve a target repository reference into URLs, clone commands, git
//! credential config and MCP tool-server definitions for GitHub, Gitea and
//! Forgejo.

pub mod checkout;
pub mod config;
pub mod credentials;
pub mod error;
pub mod provider;
pub mod repository;
pub mod resolve;
pub mod summary;
pub mod tool_server;
pub mod urls;

pub use checkout::CheckoutLayout;
pub use config::{load_target, load_target_from_str, DescriptorFormat};
pub use credentials::credential_config;
pub use error::{ConfigError, ForgelinkError, ProviderError, Result};
pub use provider::{GitProvider, ProviderConfig, ProviderDefaults};
pub use repository::TargetRepository;
pub use resolve::{
    is_github_provider, is_self_hosted_provider, resolve_api_base_url, resolve_provider,
    resolve_web_base_url,
};
pub use summary::{summarize, NamedToolServer, RepositorySummary};
pub use tool_server::{
    build_tool_server_config, tool_server_name, ToolServerInvocation, ToolServerTemplate,
};
pub use urls::{
    api_resource_url, clone_url, detect_provider_from_url, issue_url, pull_request_url,
    remote_url, web_url,
};
