use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};

use crate::model::{NewAuthor, NewBook};
use crate::storage::{Catalog, PersistenceGateway};

use super::extensions::ClientInputErrors;
use super::types::*;

pub type BookgraphSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Assemble the schema around an injected gateway.
pub fn build_schema(gateway: Arc<dyn PersistenceGateway>) -> BookgraphSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(Catalog::new(gateway))
        .extension(ClientInputErrors)
        .finish()
}

pub(super) fn catalog<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Catalog> {
    ctx.data::<Catalog>()
}

// List and mutation results are nullable so a storage failure nulls only the
// failing field instead of the whole response.

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single book by ID
    async fn book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Book>> {
        let book = catalog(ctx)?.book(&id).await.map_err(|e| e.extend())?;
        Ok(book.map(Book::from))
    }

    /// Get a single author by ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Author>> {
        let author = catalog(ctx)?.author(&id).await.map_err(|e| e.extend())?;
        Ok(author.map(Author::from))
    }

    /// List every stored book
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Book>>> {
        let books = catalog(ctx)?.books().await.map_err(|e| e.extend())?;
        Ok(Some(books.into_iter().map(Book::from).collect()))
    }

    /// List every stored author
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Author>>> {
        let authors = catalog(ctx)?.authors().await.map_err(|e| e.extend())?;
        Ok(Some(authors.into_iter().map(Author::from).collect()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
    ) -> async_graphql::Result<Option<Author>> {
        let author = catalog(ctx)?
            .add_author(NewAuthor::new(name, age))
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(author.into()))
    }

    /// Create a new book. The author is not required to exist.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        author_id: ID,
    ) -> async_graphql::Result<Option<Book>> {
        let book = catalog(ctx)?
            .add_book(NewBook::new(name, genre, author_id.0))
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(book.into()))
    }

    /// Delete an author, returning it as it was. Its books are kept.
    async fn remove_author(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Author>> {
        let author = catalog(ctx)?
            .remove_author(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(author.map(Author::from))
    }

    /// Delete a book, returning it as it was
    async fn remove_book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Book>> {
        let book = catalog(ctx)?
            .remove_book(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(book.map(Book::from))
    }
}
