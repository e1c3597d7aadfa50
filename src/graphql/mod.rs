//! GraphQL schema and resolvers for the author/book catalog.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookgraph serve --port 4000
//!
//! # Execute a query from CLI
//! bookgraph query '{ authors { name books { name } } }'
//!
//! # Execute a mutation from CLI
//! bookgraph mutate 'addAuthor(name: "George Orwell", age: 46) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Types**: `Author { id name age books }`, `Book { id name genre authorId author }`
//! - **Queries**: `book`, `author`, `books`, `authors`
//! - **Mutations**: `addAuthor`, `addBook`, `removeAuthor`, `removeBook`
//!
//! `Author.books` and `Book.author` are resolved lazily, one gateway call per field.

mod extensions;
mod schema;
mod server;
mod types;

pub use extensions::ClientInputErrors;
pub use schema::{BookgraphSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
