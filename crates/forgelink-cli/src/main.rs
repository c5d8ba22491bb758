//! forgelink: derive clone URLs, credential config and MCP server
//! definitions for GitHub, Gitea and Forgejo repositories.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
