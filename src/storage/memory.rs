use super::document::{Collection, Document, Filter, IdGenerator};
use super::gateway::PersistenceGateway;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Insertion-ordered, process-local gateway.
#[derive(Default)]
pub struct MemoryGateway {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
    ids: IdGenerator,
}

impl MemoryGateway {
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            ids,
        }
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filter.is_none_or(|f| f.matches(d)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert(&self, collection: Collection, fields: Map<String, Value>) -> Result<Document> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        let id = self
            .ids
            .generate_unique(|candidate| docs.iter().any(|d| d.id == candidate));
        let document = Document::new(id, fields);
        tracing::debug!(%collection, id = %document.id, "Inserted document in memory");
        docs.push(document.clone());
        Ok(document)
    }

    async fn delete_by_id(&self, collection: Collection, id: &str) -> Result<Option<Document>> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(None);
        };
        Ok(docs
            .iter()
            .position(|d| d.id == id)
            .map(|pos| docs.remove(pos)))
    }
}
