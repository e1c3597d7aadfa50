//! # Bookgraph - a GraphQL catalog of authors and books
//!
//! Bookgraph exposes two related entities, `Author` and `Book`, through a single GraphQL
//! schema. Relationship fields (`Author.books`, `Book.author`) are resolved lazily against
//! a pluggable document store.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a new project (flat-file storage in .bookgraph/)
//! bookgraph init
//!
//! # Add an author and a book
//! bookgraph mutate 'addAuthor(name: "George Orwell", age: 46) { id }'
//! bookgraph mutate 'addBook(name: "1984", genre: "Dystopia", authorId: "<id>") { id }'
//!
//! # Walk the graph
//! bookgraph query '{ authors { name books { name genre } } }'
//!
//! # Serve over HTTP with GraphiQL
//! bookgraph serve --port 4000
//! ```
//!
//! ## Embedding
//!
//! The schema takes its datastore as an explicit dependency:
//!
//! ```no_run
//! use std::sync::Arc;
//! use bookgraph::{graphql::build_schema, storage::MemoryGateway};
//!
//! let schema = build_schema(Arc::new(MemoryGateway::default()));
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP transport
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: Persistence gateways and the typed catalog
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookgraph.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookgraphError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides async-graphql schema for querying and mutating authors and books.
pub mod graphql;

/// Data models for authors and books.
pub mod model;

/// Document-store persistence.
///
/// Gateway trait, in-memory and flat-file implementations, and the typed catalog.
pub mod storage;

/// Input validation utilities.
///
/// Validates names, genres, ages and ids before anything is persisted.
pub mod validation;

pub mod logging;
