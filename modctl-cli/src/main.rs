//! modctl CLI - modification item tracking against a remote items API
//!
//! This is the main entry point for the modctl command-line tool, which
//! provides:
//! - Listing the modification item collection (`list` subcommand)
//! - Creating, editing, and deleting items (`add`, `edit`, `delete`)
//! - Issue-linkage sync operations (`sync` subcommand)
//!
//! The items API endpoint is resolved from `--endpoint` / `MODCTL_API_URL`,
//! then `~/.modctl/config.toml`, then the local development default.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use modctl_core::ModConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "modctl",
    author,
    version,
    about = "Manage modification items against the remote items API",
    long_about = "Load, create, edit, and delete modification items (title, status, \
                  deadline, details) over the items HTTP API, and inspect their \
                  issue-linkage state."
)]
struct Cli {
    /// Items API endpoint (default: http://localhost:8787)
    #[arg(long, env = "MODCTL_API_URL", global = true)]
    endpoint: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List modification items
    List(commands::items::ListArgs),
    /// Add a new modification item
    Add(commands::items::AddArgs),
    /// Edit an existing modification item
    Edit(commands::items::EditArgs),
    /// Delete a modification item
    Delete(commands::items::DeleteArgs),
    /// Issue-linkage operations (pending, mark-linked)
    Sync(commands::sync::SyncArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    let endpoint = ModConfig::resolve_endpoint(cli.endpoint.as_deref());
    tracing::debug!(%endpoint, "resolved items API endpoint");

    match cli.command {
        Commands::List(args) => commands::run_list(&endpoint, args).await?,
        Commands::Add(args) => commands::run_add(&endpoint, args).await?,
        Commands::Edit(args) => commands::run_edit(&endpoint, args).await?,
        Commands::Delete(args) => commands::run_delete(&endpoint, args).await?,
        Commands::Sync(args) => commands::run_sync(&endpoint, args).await?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
