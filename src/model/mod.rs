//! Data models for the catalog.
//!
//! - [`Author`] / [`NewAuthor`]: a stored author and the fields needed to create one
//! - [`Book`] / [`NewBook`]: a stored book and the fields needed to create one
//!
//! Relationships (`Author.books`, `Book.author`) are not part of these structs; they are
//! derived at read time by the GraphQL layer.

mod author;
mod book;

pub use author::{Author, NewAuthor};
pub use book::{Book, NewBook};
