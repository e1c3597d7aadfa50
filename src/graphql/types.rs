use crate::model::{Author as ModelAuthor, Book as ModelBook};
use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, SimpleObject};

use super::schema::catalog;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub age: i32,
}

#[ComplexObject]
impl Author {
    /// Books whose `authorId` is this author's id
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Book>>> {
        let books = catalog(ctx)?
            .books_by_author(&self.id)
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(books.into_iter().map(Book::from).collect()))
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
            age: a.age,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: ID,
    pub name: String,
    pub genre: String,
    pub author_id: ID,
}

#[ComplexObject]
impl Book {
    /// The author referenced by `authorId`, or null if it does not exist
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let author = catalog(ctx)?
            .author(&self.author_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(author.map(Author::from))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: ID(b.id),
            name: b.name,
            genre: b.genre,
            author_id: ID(b.author_id),
        }
    }
}
