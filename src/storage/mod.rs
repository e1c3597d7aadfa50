//! Persistence layer for authors and books.
//!
//! ## Components
//!
//! - [`PersistenceGateway`]: async document-store contract (find by id, scan, insert, delete)
//! - [`MemoryGateway`]: in-process gateway, used by tests and the `memory` backend
//! - [`FileGateway`]: flat-file gateway storing one JSON array per collection
//! - [`Catalog`]: typed author/book operations the GraphQL resolvers call
//!
//! ## On-disk layout
//!
//! ```text
//! .bookgraph/
//!   authors.json   [{"id": "x7k2m9q4a1bz", "name": "George Orwell", "age": 46}]
//!   books.json     [{"id": "...", "name": "1984", "genre": "Dystopia", "authorId": "x7k2m9q4a1bz"}]
//! ```

mod catalog;
mod document;
mod file;
mod gateway;
mod memory;

pub use catalog::Catalog;
pub use document::{Collection, Document, Filter, IdGenerator};
pub use file::FileGateway;
pub use gateway::PersistenceGateway;
pub use memory::MemoryGateway;

use crate::config::{BookgraphConfig, StorageBackend};
use std::path::Path;
use std::sync::Arc;

/// Opens the gateway selected by `storage.backend`.
pub fn open_gateway(config: &BookgraphConfig, project_root: &Path) -> Arc<dyn PersistenceGateway> {
    let ids = IdGenerator::new(config.ids.length);
    match config.storage.backend {
        StorageBackend::File => {
            let data_path = config.data_path(project_root);
            tracing::debug!(path = %data_path.display(), "Using file storage");
            Arc::new(FileGateway::new(data_path, ids))
        }
        StorageBackend::Memory => {
            tracing::debug!("Using in-memory storage");
            Arc::new(MemoryGateway::new(ids))
        }
    }
}
