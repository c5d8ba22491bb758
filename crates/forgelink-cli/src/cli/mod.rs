//! Command-line interface for forgelink
//!
//! Every subcommand resolves a target repository (from a descriptor file or
//! flags) and prints the derived values as JSON on stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use forgelink::{
    build_tool_server_config, credential_config, detect_provider_from_url, issue_url,
    pull_request_url, summarize, tool_server_name, CheckoutLayout, GitProvider, NamedToolServer,
};

mod target;

use target::TargetArgs;

/// Resolve Git hosting targets into URLs, credentials and MCP servers
#[derive(Parser)]
#[command(name = "forgelink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print provider, URLs, credential config and tool server for a target
    Show(TargetArgs),

    /// Print the web URL of an issue or pull request
    Url {
        #[command(flatten)]
        target: TargetArgs,

        /// Issue number
        #[arg(long, conflicts_with = "pull")]
        issue: Option<u64>,

        /// Pull request number
        #[arg(long)]
        pull: Option<u64>,
    },

    /// Print the git clone command for a target
    CloneCommand {
        #[command(flatten)]
        target: TargetArgs,

        /// Directory under which repositories are checked out
        #[arg(long, default_value = forgelink::checkout::SANDBOX_ROOT_DIR)]
        root: PathBuf,

        /// Check out into this directory regardless of repository name
        #[arg(long)]
        local_dir: Option<PathBuf>,
    },

    /// Print git credential config entries for a target
    Credentials(TargetArgs),

    /// Print the MCP tool server invocation for a target (null for GitHub)
    ToolServer(TargetArgs),

    /// Guess the provider of a repository URL (github or gitea)
    Detect {
        /// Repository URL
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Show(args) => {
            let target = args.resolve()?;
            print_json(&summarize(&target)?)
        }
        Commands::Url { target, issue, pull } => {
            let target = target.resolve()?;
            let url = match (issue, pull) {
                (Some(number), _) => issue_url(&target, number),
                (None, Some(number)) => pull_request_url(&target, number),
                (None, None) => forgelink::web_url(&target),
            };
            print_json(&url)
        }
        Commands::CloneCommand {
            target,
            root,
            local_dir,
        } => {
            let target = target.resolve()?;
            let layout = CheckoutLayout {
                root,
                local_working_dir: local_dir,
            };
            print_json(&layout.git_clone_command(&target)?)
        }
        Commands::Credentials(args) => {
            let target = args.resolve()?;
            print_json(&credential_config(&target)?)
        }
        Commands::ToolServer(args) => {
            let target = args.resolve()?;
            let Some(provider) = target.provider.as_ref() else {
                return print_json(&serde_json::Value::Null);
            };

            let invocation = build_tool_server_config(provider)
                .with_context(|| format!("Cannot build tool server for {}", target.full_name()))?;
            match invocation {
                Some(invocation) => print_json(&NamedToolServer {
                    name: provider
                        .tool_server_name
                        .clone()
                        .unwrap_or_else(|| tool_server_name(provider.provider_type)),
                    invocation,
                }),
                None => print_json(&serde_json::Value::Null),
            }
        }
        Commands::Detect { url } => {
            let provider: GitProvider = detect_provider_from_url(&url);
            print_json(&provider)
        }
    }
}

/// Installs the stderr subscriber.
///
/// A set `RUST_LOG` wins over `--verbose`; without it the level is DEBUG when
/// verbose and WARN otherwise.
fn init_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter);
    // The library logs through both `tracing` and `log`.
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = tracing_log::LogTracer::init();
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    println!("{}", rendered);
    Ok(())
}
