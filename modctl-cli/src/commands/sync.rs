//! Issue-linkage sync commands
//!
//! The server tracks which items are linked to an external tracking issue
//! (`link_status` / `issue_number`, both server-owned). These commands read
//! the pending set and record a completed linkage; the regular add/edit path
//! never touches those fields.

use anyhow::Result;
use clap::{Parser, Subcommand};
use modctl_core::{HttpItemsApi, ItemsApi};

use super::items::{get_output_format, render_items, OutputFormat};

#[derive(Parser, Debug)]
pub struct SyncArgs {
    #[command(subcommand)]
    pub command: SyncCommands,
}

#[derive(Subcommand, Debug)]
pub enum SyncCommands {
    /// List items not yet linked to a tracking issue
    Pending(PendingArgs),
    /// Mark an item as linked to a tracking issue
    MarkLinked(MarkLinkedArgs),
}

#[derive(Parser, Debug)]
pub struct PendingArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Shorthand for --output quiet
    #[arg(long, short, conflicts_with = "output")]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct MarkLinkedArgs {
    /// Item id to mark
    pub id: u64,

    /// Tracking issue number
    #[arg(long)]
    pub issue: u64,
}

pub async fn run_sync(endpoint: &str, args: SyncArgs) -> Result<()> {
    match args.command {
        SyncCommands::Pending(pending_args) => run_pending(endpoint, pending_args).await,
        SyncCommands::MarkLinked(mark_args) => run_mark_linked(endpoint, mark_args).await,
    }
}

async fn run_pending(endpoint: &str, args: PendingArgs) -> Result<()> {
    let format = get_output_format(args.output, args.json, args.quiet);

    let api = HttpItemsApi::new(endpoint);
    let items = api.list_pending_sync().await?;

    render_items(&items, format, "items pending sync")
}

async fn run_mark_linked(endpoint: &str, args: MarkLinkedArgs) -> Result<()> {
    let api = HttpItemsApi::new(endpoint);
    api.mark_linked(args.id, args.issue).await?;

    println!("✓ Marked #{} linked to issue #{}", args.id, args.issue);
    Ok(())
}
