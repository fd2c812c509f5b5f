//! Modification list view controller.
//!
//! Owns all view state explicitly: the ordered item collection mirroring the
//! server, the creation draft, the current edit selection, the dialog flags,
//! one advisory in-flight flag, and one error-message slot. State is created
//! with the controller and torn down with it; there is no ambient global.
//!
//! Every operation follows the same protocol: entering clears the error and
//! sets the in-flight flag; leaving clears the flag whether or not the call
//! succeeded; failure stores the message verbatim and leaves the local
//! collection untouched. The flag is advisory only: overlapping operations
//! are not serialized against each other.

use crate::api::ItemsApi;
use crate::error::{ModError, Result};
use crate::model::{ItemDraft, ModificationItem};

pub struct ListView<A: ItemsApi> {
    api: A,
    /// Ordered local mirror of the server collection
    pub items: Vec<ModificationItem>,
    /// Creation form state
    pub draft: ItemDraft,
    /// Item currently selected for editing, if any
    pub editing: Option<ModificationItem>,
    /// Creation dialog open?
    pub add_open: bool,
    /// Edit dialog open?
    pub edit_open: bool,
    /// An HTTP round-trip is pending
    pub in_flight: bool,
    /// Last error message, surfaced verbatim
    pub error: Option<String>,
}

impl<A: ItemsApi> ListView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
            draft: ItemDraft::default(),
            editing: None,
            add_open: false,
            edit_open: false,
            in_flight: false,
            error: None,
        }
    }

    fn begin(&mut self) {
        self.error = None;
        self.in_flight = true;
    }

    fn fail(&mut self, err: ModError) -> ModError {
        self.error = Some(err.to_string());
        err
    }

    /// Refresh the whole collection from the server
    pub async fn load_all(&mut self) -> Result<()> {
        self.begin();
        let result = self.api.list().await;
        self.in_flight = false;

        match result {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Create an item from the draft form.
    ///
    /// Title and deadline are required; a missing field fails locally with a
    /// validation message and performs no network call. On success the new
    /// record is appended and returned, the draft reset, and the creation
    /// dialog closed.
    pub async fn add_one(&mut self) -> Result<ModificationItem> {
        if self.draft.title.is_empty() || self.draft.deadline.is_empty() {
            let err = ModError::validation("title and deadline are required");
            return Err(self.fail(err));
        }

        self.begin();
        let result = self.api.create(&self.draft).await;
        self.in_flight = false;

        match result {
            Ok(item) => {
                self.items.push(item.clone());
                self.draft = ItemDraft::default();
                self.add_open = false;
                Ok(item)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Select an item for editing by id. Returns false when the id is not in
    /// the local collection.
    pub fn start_edit(&mut self, id: u64) -> bool {
        match self.items.iter().find(|item| item.id == id) {
            Some(item) => {
                self.editing = Some(item.clone());
                self.edit_open = true;
                true
            }
            None => false,
        }
    }

    /// Push the edited fields of the current selection to the server.
    ///
    /// A no-op when nothing is selected. On success the matching item is
    /// replaced by id, the edit dialog closed, and the selection cleared.
    pub async fn update_one(&mut self) -> Result<()> {
        let Some(selected) = self.editing.clone() else {
            return Ok(());
        };

        self.begin();
        let result = self.api.update(selected.id, &selected.patch()).await;
        self.in_flight = false;

        match result {
            Ok(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|item| item.id == updated.id) {
                    *slot = updated;
                }
                self.edit_open = false;
                self.editing = None;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Delete an item by id; on success it is removed from the collection
    pub async fn remove_one(&mut self, id: u64) -> Result<()> {
        self.begin();
        let result = self.api.delete(id).await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }
}
