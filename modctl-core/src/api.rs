//! Items API client.
//!
//! The upstream API is ambiguous about envelopes: collection bodies arrive
//! either as a bare JSON array or wrapped under one of several known keys,
//! and single records arrive bare or wrapped under `modification_item`.
//! That tolerance is kept here as an explicit normalization step instead of
//! assuming one shape.
//!
//! Endpoints (base URL from configuration):
//! - `GET    /items`
//! - `POST   /items`            body `{title, status, deadline, details}`
//! - `PUT    /items?id=<id>`    body `{title, status, deadline, details}`
//! - `DELETE /items?id=<id>`
//! - `GET    /items/for-sync`
//! - `POST   /items/mark-linked` body `{id, issue_number}`

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ModError, Result};
use crate::model::{ItemDraft, ItemPatch, ModificationItem, RawItem};

/// Wrapper keys probed, in order, when a collection body is an object
const COLLECTION_KEYS: [&str; 3] = ["modification_items", "modifications", "items"];

/// Wrapper key probed when a single-record body is an object
const RECORD_KEY: &str = "modification_item";

/// Seam between the list view and the remote items API
#[async_trait]
pub trait ItemsApi {
    async fn list(&self) -> Result<Vec<ModificationItem>>;
    async fn create(&self, draft: &ItemDraft) -> Result<ModificationItem>;
    async fn update(&self, id: u64, patch: &ItemPatch) -> Result<ModificationItem>;
    async fn delete(&self, id: u64) -> Result<()>;
    /// Items not yet linked to an external tracking issue
    async fn list_pending_sync(&self) -> Result<Vec<ModificationItem>>;
    /// Mark an item as linked to the given tracking issue
    async fn mark_linked(&self, id: u64, issue_number: u64) -> Result<()>;
}

/// Normalize a collection body: bare array, or object wrapped under one of
/// the known keys. An object with none of the keys, or with only null
/// values under them, is an empty collection.
pub(crate) fn decode_collection(body: Value, context: &str) -> Result<Vec<ModificationItem>> {
    let records = match body {
        Value::Object(mut map) => {
            let found = COLLECTION_KEYS
                .iter()
                .find_map(|key| map.remove(*key).filter(|value| !value.is_null()));
            match found {
                Some(value) => value,
                None => return Ok(Vec::new()),
            }
        }
        other => other,
    };

    let raw: Vec<RawItem> =
        serde_json::from_value(records).map_err(|err| ModError::decode(context, err))?;
    Ok(raw.into_iter().map(Into::into).collect())
}

/// Normalize a single-record body: bare, or wrapped under
/// `modification_item`. A null wrapper value falls through to the bare body.
pub(crate) fn decode_record(body: Value, context: &str) -> Result<ModificationItem> {
    let record = match body {
        Value::Object(mut map) if map.get(RECORD_KEY).map_or(false, |v| !v.is_null()) => {
            map.remove(RECORD_KEY).unwrap_or(Value::Null)
        }
        other => other,
    };

    let raw: RawItem =
        serde_json::from_value(record).map_err(|err| ModError::decode(context, err))?;
    Ok(raw.into())
}

/// HTTP implementation of [`ItemsApi`] backed by reqwest.
///
/// No retries, no timeouts: every operation is a single round-trip and any
/// non-2xx status is a failure whose message derives from the status text.
pub struct HttpItemsApi {
    client: Client,
    base_url: String,
}

impl HttpItemsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Check the status and read the body as JSON; the body of a failed response
/// is not parsed for error detail beyond the status text.
async fn read_json(response: reqwest::Response, context: &str) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        return Err(ModError::status(context, status));
    }
    Ok(response.json::<Value>().await?)
}

#[derive(Serialize)]
struct MarkLinkedRequest {
    id: u64,
    issue_number: u64,
}

#[async_trait]
impl ItemsApi for HttpItemsApi {
    async fn list(&self) -> Result<Vec<ModificationItem>> {
        let url = self.url("/items");
        debug!(%url, "fetching items");

        let response = self.client.get(&url).send().await?;
        let body = read_json(response, "failed to fetch items").await?;
        decode_collection(body, "items collection")
    }

    async fn create(&self, draft: &ItemDraft) -> Result<ModificationItem> {
        let url = self.url("/items");
        debug!(%url, title = %draft.title, "creating item");

        let response = self.client.post(&url).json(draft).send().await?;
        let body = read_json(response, "failed to add item").await?;
        decode_record(body, "created item")
    }

    async fn update(&self, id: u64, patch: &ItemPatch) -> Result<ModificationItem> {
        let url = format!("{}?id={}", self.url("/items"), id);
        debug!(%url, "updating item");

        let response = self.client.put(&url).json(patch).send().await?;
        let body = read_json(response, "failed to update item").await?;
        decode_record(body, "updated item")
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let url = format!("{}?id={}", self.url("/items"), id);
        debug!(%url, "deleting item");

        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ModError::status("failed to delete item", status));
        }
        // 200 or 204; any body is ignored
        Ok(())
    }

    async fn list_pending_sync(&self) -> Result<Vec<ModificationItem>> {
        let url = self.url("/items/for-sync");
        debug!(%url, "fetching items pending sync");

        let response = self.client.get(&url).send().await?;
        let body = read_json(response, "failed to fetch items pending sync").await?;
        decode_collection(body, "pending sync collection")
    }

    async fn mark_linked(&self, id: u64, issue_number: u64) -> Result<()> {
        let url = self.url("/items/mark-linked");
        debug!(%url, id, issue_number, "marking item linked");

        let request = MarkLinkedRequest { id, issue_number };
        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ModError::status("failed to mark item linked", status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: u64) -> Value {
        json!({
            "id": id,
            "title": format!("item {id}"),
            "status": "not-started",
            "deadline": "2025-04-01"
        })
    }

    #[test]
    fn collection_accepts_bare_array() {
        let items = decode_collection(json!([record(1), record(2)]), "test").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn collection_accepts_each_wrapper_key() {
        for key in ["modification_items", "modifications", "items"] {
            let items = decode_collection(json!({ key: [record(5)] }), "test").unwrap();
            assert_eq!(items.len(), 1, "wrapper key {key}");
            assert_eq!(items[0].id, 5);
        }
    }

    #[test]
    fn wrapped_and_bare_collections_normalize_identically() {
        let bare = decode_collection(json!([record(1)]), "test").unwrap();
        let wrapped =
            decode_collection(json!({"modification_items": [record(1)]}), "test").unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn unknown_wrapper_is_an_empty_collection() {
        let items = decode_collection(json!({"results": [record(1)]}), "test").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn null_wrapper_keys_fall_through() {
        let items = decode_collection(
            json!({"modification_items": null, "modifications": [record(8)]}),
            "test",
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 8);

        let items = decode_collection(json!({"items": null}), "test").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn null_record_wrapper_falls_back_to_bare_body() {
        let mut body = record(9);
        body.as_object_mut()
            .unwrap()
            .insert("modification_item".to_string(), Value::Null);

        let item = decode_record(body, "test").unwrap();
        assert_eq!(item.id, 9);
    }

    #[test]
    fn malformed_collection_is_a_decode_error() {
        let err = decode_collection(json!({"items": "oops"}), "items collection").unwrap_err();
        assert!(err.to_string().contains("items collection"));
    }

    #[test]
    fn record_accepts_bare_and_wrapped() {
        let bare = decode_record(record(9), "test").unwrap();
        let wrapped = decode_record(json!({"modification_item": record(9)}), "test").unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.id, 9);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpItemsApi::new("http://localhost:8787/");
        assert_eq!(api.base_url(), "http://localhost:8787");
        assert_eq!(api.url("/items"), "http://localhost:8787/items");
    }
}
