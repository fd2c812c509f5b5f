//! Data model for modification items.
//!
//! A modification item is a tracked change request: title, workflow status,
//! deadline, and linkage metadata maintained by the server (`link_status`,
//! `issue_number`). The client never writes the linkage fields through the
//! regular add/edit path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModError;

/// Default link status when the server record carries none
pub const UNSET_LINK_STATUS: &str = "unset";

/// Workflow status of a modification item (kebab-case on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    #[default]
    NotStarted,
    InProgress,
    Resolved,
    Done,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::NotStarted => "not-started",
            ItemStatus::InProgress => "in-progress",
            ItemStatus::Resolved => "resolved",
            ItemStatus::Done => "done",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = ModError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(ItemStatus::NotStarted),
            "in-progress" => Ok(ItemStatus::InProgress),
            "resolved" => Ok(ItemStatus::Resolved),
            "done" => Ok(ItemStatus::Done),
            other => Err(ModError::validation(format!(
                "unknown status '{other}' (expected not-started, in-progress, resolved, done)"
            ))),
        }
    }
}

/// A normalized modification item as held in the local collection.
///
/// `id` is server-assigned, stable once assigned, and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModificationItem {
    pub id: u64,
    pub title: String,
    pub status: ItemStatus,
    pub deadline: String,
    pub link_status: String,
    pub details: Option<String>,
    pub issue_number: Option<u64>,
}

impl ModificationItem {
    /// Editable fields of this item, for an update request
    pub fn patch(&self) -> ItemPatch {
        ItemPatch {
            title: self.title.clone(),
            status: self.status,
            deadline: self.deadline.clone(),
            details: self.details.clone().unwrap_or_default(),
        }
    }
}

/// A raw server record before normalization.
///
/// The server speaks snake_case and may omit the linkage fields entirely.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawItem {
    pub id: u64,
    pub title: String,
    pub status: ItemStatus,
    pub deadline: String,
    #[serde(default)]
    pub link_status: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub issue_number: Option<u64>,
}

impl From<RawItem> for ModificationItem {
    fn from(raw: RawItem) -> Self {
        ModificationItem {
            id: raw.id,
            title: raw.title,
            status: raw.status,
            deadline: raw.deadline,
            // Absent or empty link_status normalizes to "unset"
            link_status: raw
                .link_status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNSET_LINK_STATUS.to_string()),
            details: raw.details.filter(|d| !d.is_empty()),
            issue_number: raw.issue_number,
        }
    }
}

/// Draft for a new item (the creation form)
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemDraft {
    pub title: String,
    pub status: ItemStatus,
    pub deadline: String,
    pub details: String,
}

/// Editable fields sent on update.
///
/// `link_status` and `issue_number` are server-owned and deliberately absent.
#[derive(Debug, Clone, Serialize)]
pub struct ItemPatch {
    pub title: String,
    pub status: ItemStatus,
    pub deadline: String,
    pub details: String,
}
