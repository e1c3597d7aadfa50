use super::document::{Collection, Document, Filter, IdGenerator};
use super::gateway::PersistenceGateway;
use crate::error::{BookgraphError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

/// Flat-file document store.
///
/// Each collection lives in `<data_path>/<collection>.json` as a JSON array in insertion
/// order. Writes rewrite the whole file through a temp file and rename, so readers never
/// observe a half-written collection.
pub struct FileGateway {
    data_path: PathBuf,
    ids: IdGenerator,
    write_lock: Mutex<()>,
}

impl FileGateway {
    pub fn new(data_path: impl Into<PathBuf>, ids: IdGenerator) -> Self {
        Self {
            data_path: data_path.into(),
            ids,
            write_lock: Mutex::new(()),
        }
    }

    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.data_path.join(format!("{}.json", collection))
    }

    async fn load(&self, collection: Collection) -> Result<Vec<Document>> {
        let path = self.collection_path(collection);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                BookgraphError::Storage(format!("Corrupt collection {}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, collection: Collection, documents: Vec<Document>) -> Result<()> {
        tokio::fs::create_dir_all(&self.data_path).await?;
        let path = self.collection_path(collection);

        tokio::task::spawn_blocking(move || write_collection(collection, &path, &documents))
            .await
            .map_err(|e| {
                BookgraphError::Storage(format!("Write task for {} failed: {}", collection, e))
            })?
    }
}

/// Replace a collection file with `documents`, streamed as a pretty JSON array into a
/// sibling temp file that is then renamed over the old one.
fn write_collection(collection: Collection, path: &Path, documents: &[Document]) -> Result<()> {
    let failed = |step: &str, e: &dyn std::fmt::Display| {
        BookgraphError::Storage(format!("Failed to {} {} collection: {}", step, collection, e))
    };

    let data_dir = path
        .parent()
        .ok_or_else(|| failed("locate", &"path has no parent directory"))?;
    let staged = NamedTempFile::new_in(data_dir).map_err(|e| failed("stage", &e))?;

    let mut writer = BufWriter::new(staged);
    serde_json::to_writer_pretty(&mut writer, documents).map_err(|e| failed("encode", &e))?;
    writer.write_all(b"\n").map_err(|e| failed("write", &e))?;
    let staged = writer.into_inner().map_err(|e| failed("flush", &e.error()))?;
    staged.as_file().sync_all().map_err(|e| failed("sync", &e))?;

    staged.persist(path).map_err(|e| failed("replace", &e))?;
    Ok(())
}

#[async_trait]
impl PersistenceGateway for FileGateway {
    async fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Document>> {
        let documents = self.load(collection).await?;
        Ok(documents.into_iter().find(|d| d.id == id))
    }

    async fn find(
        &self,
        collection: Collection,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>> {
        let mut documents = self.load(collection).await?;
        if let Some(filter) = filter {
            documents.retain(|d| filter.matches(d));
        }
        Ok(documents)
    }

    async fn insert(&self, collection: Collection, fields: Map<String, Value>) -> Result<Document> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.load(collection).await?;

        let id = self
            .ids
            .generate_unique(|candidate| documents.iter().any(|d| d.id == candidate));
        let document = Document::new(id, fields);
        documents.push(document.clone());

        self.store(collection, documents).await?;
        tracing::debug!(%collection, id = %document.id, "Inserted document on disk");
        Ok(document)
    }

    async fn delete_by_id(&self, collection: Collection, id: &str) -> Result<Option<Document>> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.load(collection).await?;

        let Some(pos) = documents.iter().position(|d| d.id == id) else {
            return Ok(None);
        };
        let removed = documents.remove(pos);

        self.store(collection, documents).await?;
        tracing::debug!(%collection, id = %removed.id, "Deleted document on disk");
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn named(name: &str) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(name));
        fields
    }

    #[tokio::test]
    async fn test_missing_collection_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path().join("data"), IdGenerator::default());
        assert!(gateway.find(Collection::Books, None).await.unwrap().is_empty());
        assert!(
            gateway
                .find_by_id(Collection::Authors, "nope")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_insert_writes_collection_file() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path().join("data"), IdGenerator::default());

        let doc = gateway
            .insert(Collection::Authors, named("Orwell"))
            .await
            .unwrap();

        let path = gateway.collection_path(Collection::Authors);
        assert!(path.ends_with("authors.json"));
        let on_disk: Vec<Document> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, vec![doc]);
    }

    #[tokio::test]
    async fn test_documents_survive_new_gateway() {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("data");

        let first = FileGateway::new(&data, IdGenerator::default());
        let a = first.insert(Collection::Books, named("one")).await.unwrap();
        let b = first.insert(Collection::Books, named("two")).await.unwrap();

        let second = FileGateway::new(&data, IdGenerator::default());
        let all = second.find(Collection::Books, None).await.unwrap();
        assert_eq!(all, vec![a.clone(), b]);

        let removed = second.delete_by_id(Collection::Books, &a.id).await.unwrap();
        assert_eq!(removed, Some(a.clone()));
        assert!(
            first
                .find_by_id(Collection::Books, &a.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path(), IdGenerator::default());
        std::fs::write(gateway.collection_path(Collection::Authors), "{not json").unwrap();

        let err = gateway.find(Collection::Authors, None).await.unwrap_err();
        assert!(matches!(err, BookgraphError::Storage(_)));
    }

    #[test]
    fn test_write_collection_replaces_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.json");
        std::fs::write(&path, "stale contents that are not json").unwrap();

        let docs = vec![Document::new("b1".to_string(), named("Animal Farm"))];
        write_collection(Collection::Books, &path, &docs).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("]\n"));
        let on_disk: Vec<Document> = serde_json::from_str(&content).unwrap();
        assert_eq!(on_disk, docs);

        // Only the collection file remains; the staged temp file was renamed
        let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_write_collection_names_collection_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("authors.json");

        let err = write_collection(Collection::Authors, &path, &[]).unwrap_err();
        assert!(matches!(err, BookgraphError::Storage(ref msg) if msg.contains("authors")));
    }
}
