//! Command implementations for the modctl CLI

pub mod items;
pub mod sync;

// Re-export main dispatcher functions for flat access from main.rs
pub use items::{run_add, run_delete, run_edit, run_list};
pub use sync::run_sync;
