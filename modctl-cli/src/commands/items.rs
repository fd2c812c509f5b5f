//! Item CRUD commands - drive the list view against the items HTTP API
//!
//! Commands: list, add, edit, delete
//!
//! Each command builds a fresh [`ListView`] over the resolved endpoint; the
//! controller owns the collection mirror, the draft form, the edit
//! selection, and the shared in-flight/error state.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use modctl_core::{HttpItemsApi, ItemDraft, ItemStatus, ListView, ModificationItem};

// ============================================================================
// Output Format (shared)
// ============================================================================

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (for piping to jq)
    Json,
    /// Quiet mode - ids only
    Quiet,
}

pub(crate) fn get_output_format(
    output: OutputFormat,
    json_flag: bool,
    quiet_flag: bool,
) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else if quiet_flag {
        OutputFormat::Quiet
    } else {
        output
    }
}

/// Reject deadlines that are not calendar dates; the wire format stays the
/// plain YYYY-MM-DD string
fn parse_deadline(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| value.to_string())
        .map_err(|_| format!("invalid deadline '{value}': expected YYYY-MM-DD"))
}

// ============================================================================
// Args
// ============================================================================

#[derive(Parser, Debug)]
pub struct ListArgs {
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
pub struct AddArgs {
    /// Item title
    #[arg(long, short)]
    pub title: String,

    /// Deadline (YYYY-MM-DD)
    #[arg(long, short, value_parser = parse_deadline)]
    pub deadline: String,

    /// Initial status
    #[arg(long, short, default_value = "not-started")]
    pub status: ItemStatus,

    /// Free-form details
    #[arg(long)]
    pub details: Option<String>,
}

#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Item id to edit
    pub id: u64,

    /// New title
    #[arg(long, short)]
    pub title: Option<String>,

    /// New status
    #[arg(long, short)]
    pub status: Option<ItemStatus>,

    /// New deadline (YYYY-MM-DD)
    #[arg(long, short, value_parser = parse_deadline)]
    pub deadline: Option<String>,

    /// New details
    #[arg(long)]
    pub details: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Item id to delete
    pub id: u64,
}

// ============================================================================
// Rendering
// ============================================================================

pub(crate) fn render_items(
    items: &[ModificationItem],
    format: OutputFormat,
    header: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        OutputFormat::Quiet => {
            for item in items {
                println!("{}", item.id);
            }
        }
        OutputFormat::Human => {
            println!("┌─ {} ({})", header, items.len());
            println!("│");

            if items.is_empty() {
                println!("│  (no items)");
            } else {
                for (i, item) in items.iter().enumerate() {
                    let is_last = i == items.len() - 1;
                    let prefix = if is_last { "└─" } else { "├─" };
                    let cont_prefix = if is_last { "   " } else { "│  " };

                    println!("{} [{}] #{} {}", prefix, item.status, item.id, item.title);
                    println!(
                        "{}deadline: {}  link: {}",
                        cont_prefix, item.deadline, item.link_status
                    );

                    if let Some(ref details) = item.details {
                        println!("{}details: {}", cont_prefix, details);
                    }
                    if let Some(issue) = item.issue_number {
                        println!("{}issue: #{}", cont_prefix, issue);
                    }

                    if !is_last {
                        println!("│");
                    }
                }
            }
        }
    }

    Ok(())
}

// ============================================================================
// Command Implementations
// ============================================================================

pub async fn run_list(endpoint: &str, args: ListArgs) -> Result<()> {
    let format = get_output_format(args.output, args.json, args.quiet);

    let mut view = ListView::new(HttpItemsApi::new(endpoint));
    view.load_all().await?;

    render_items(&view.items, format, "modification items")
}

pub async fn run_add(endpoint: &str, args: AddArgs) -> Result<()> {
    let mut view = ListView::new(HttpItemsApi::new(endpoint));
    view.draft = ItemDraft {
        title: args.title,
        status: args.status,
        deadline: args.deadline,
        details: args.details.unwrap_or_default(),
    };

    let added = view.add_one().await?;
    println!("✓ Added #{} {}", added.id, added.title);

    Ok(())
}

pub async fn run_edit(endpoint: &str, args: EditArgs) -> Result<()> {
    let mut view = ListView::new(HttpItemsApi::new(endpoint));
    view.load_all().await?;

    if !view.start_edit(args.id) {
        bail!("item #{} not found", args.id);
    }

    if let Some(selected) = view.editing.as_mut() {
        if let Some(title) = args.title {
            selected.title = title;
        }
        if let Some(status) = args.status {
            selected.status = status;
        }
        if let Some(deadline) = args.deadline {
            selected.deadline = deadline;
        }
        if let Some(details) = args.details {
            selected.details = if details.is_empty() {
                None
            } else {
                Some(details)
            };
        }
    }

    view.update_one().await?;

    println!("✓ Updated #{}", args.id);
    Ok(())
}

pub async fn run_delete(endpoint: &str, args: DeleteArgs) -> Result<()> {
    let mut view = ListView::new(HttpItemsApi::new(endpoint));
    view.load_all().await?;

    view.remove_one(args.id).await?;

    println!("✓ Deleted #{}", args.id);
    Ok(())
}
