//! # bookql - a small GraphQL API over authors and books
//!
//! bookql keeps two append-only collections, authors and books, in memory and
//! exposes them through a GraphQL schema. A book points at its author by id;
//! an author lists the books that point at it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API on http://127.0.0.1:5000/graphql
//! bookql serve
//!
//! # Query in-process
//! bookql query '{ authors { name books { name } } }'
//!
//! # Print the schema
//! bookql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: In-memory record store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookql.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum endpoint serving it.
pub mod graphql;

/// Data models for authors and books.
pub mod model;

/// In-memory record store and relational lookups.
pub mod storage;

pub mod logging;
