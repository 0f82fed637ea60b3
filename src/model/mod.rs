//! Data models for bookql.
//!
//! - [`Author`]: A writer, identified by a positional id
//! - [`Book`]: A book, linked to its author by `author_id`

mod author;
mod book;

pub use author::Author;
pub use book::Book;
