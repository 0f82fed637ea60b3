//! GraphQL schema and resolvers for bookql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookql serve --port 5000
//!
//! # Execute a query from the CLI
//! bookql query '{ author(id: 1) { name books { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookql mutate 'addAuthor(name: "C. Dickens") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `author`, `books`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookqlSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server};
pub use types::*;
