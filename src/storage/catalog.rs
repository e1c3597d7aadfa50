use super::document::{Collection, Document, Filter};
use super::gateway::PersistenceGateway;
use crate::{
    error::Result,
    model::{Author, Book, NewAuthor, NewBook},
    validation,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Typed access to authors and books on top of a [`PersistenceGateway`].
///
/// Every call goes straight to the gateway: there is no batching and nothing is
/// remembered between calls.
#[derive(Clone)]
pub struct Catalog {
    gateway: Arc<dyn PersistenceGateway>,
}

fn decode_all<T: DeserializeOwned>(documents: Vec<Document>) -> Result<Vec<T>> {
    documents.into_iter().map(Document::into_record).collect()
}

impl Catalog {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { gateway }
    }

    pub async fn author(&self, id: &str) -> Result<Option<Author>> {
        tracing::debug!(id = %id, "Looking up author");
        self.gateway
            .find_by_id(Collection::Authors, id)
            .await?
            .map(Document::into_record)
            .transpose()
    }

    pub async fn authors(&self) -> Result<Vec<Author>> {
        decode_all(self.gateway.find(Collection::Authors, None).await?)
    }

    pub async fn book(&self, id: &str) -> Result<Option<Book>> {
        tracing::debug!(id = %id, "Looking up book");
        self.gateway
            .find_by_id(Collection::Books, id)
            .await?
            .map(Document::into_record)
            .transpose()
    }

    pub async fn books(&self) -> Result<Vec<Book>> {
        decode_all(self.gateway.find(Collection::Books, None).await?)
    }

    /// Books whose `authorId` equals `author_id`, in storage order.
    pub async fn books_by_author(&self, author_id: &str) -> Result<Vec<Book>> {
        tracing::debug!(author_id = %author_id, "Scanning books by author");
        let filter = Filter::eq("authorId", author_id);
        decode_all(self.gateway.find(Collection::Books, Some(&filter)).await?)
    }

    pub async fn add_author(&self, author: NewAuthor) -> Result<Author> {
        validation::validate_new_author(&author)?;

        let fields = Document::fields_of(&author)?;
        let document = self.gateway.insert(Collection::Authors, fields).await?;
        tracing::info!(id = %document.id, name = %author.name, "Created author");
        document.into_record()
    }

    /// Creates a book without checking that its author exists.
    pub async fn add_book(&self, book: NewBook) -> Result<Book> {
        validation::validate_new_book(&book)?;

        let fields = Document::fields_of(&book)?;
        let document = self.gateway.insert(Collection::Books, fields).await?;
        tracing::info!(
            id = %document.id,
            name = %book.name,
            author_id = %book.author_id,
            "Created book"
        );
        document.into_record()
    }

    /// Deletes an author. Books pointing at it are left in place.
    pub async fn remove_author(&self, id: &str) -> Result<Option<Author>> {
        validation::validate_id(id)?;
        tracing::info!(id = %id, "Deleting author");
        self.gateway
            .delete_by_id(Collection::Authors, id)
            .await?
            .map(Document::into_record)
            .transpose()
    }

    pub async fn remove_book(&self, id: &str) -> Result<Option<Book>> {
        validation::validate_id(id)?;
        tracing::info!(id = %id, "Deleting book");
        self.gateway
            .delete_by_id(Collection::Books, id)
            .await?
            .map(Document::into_record)
            .transpose()
    }
}
