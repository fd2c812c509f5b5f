pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod view;

pub use api::{HttpItemsApi, ItemsApi};
pub use config::{ModConfig, DEFAULT_BASE_URL};
pub use error::{ModError, Result};
pub use model::{ItemDraft, ItemPatch, ItemStatus, ModificationItem, UNSET_LINK_STATUS};
pub use view::ListView;
