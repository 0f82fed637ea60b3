//! In-memory storage layer for bookql.
//!
//! Authors and books live in two append-only sequences owned by a
//! [`RecordStore`]. Nothing is persisted; a process starts either empty or
//! from the sample records in [`seed`].
//!
//! ## Components
//!
//! - [`RecordStore`]: append and lookup operations over both sequences
//! - [`seed`]: the sample authors and books

mod record_store;
pub mod seed;

pub use record_store::RecordStore;
