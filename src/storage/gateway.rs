use super::document::{Collection, Document, Filter};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Async access to a document store holding the `authors` and `books` collections.
///
/// Lookups that match nothing are `Ok(None)` / an empty `Vec`, never errors. Errors are
/// reserved for the store itself failing.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Document>>;

    /// Scans a collection in storage order, keeping documents that match `filter`.
    async fn find(&self, collection: Collection, filter: Option<&Filter>)
    -> Result<Vec<Document>>;

    /// Persists `fields` as a new document and returns it with its assigned id.
    async fn insert(&self, collection: Collection, fields: Map<String, Value>) -> Result<Document>;

    /// Removes a document, returning what was stored.
    async fn delete_by_id(&self, collection: Collection, id: &str) -> Result<Option<Document>>;
}
