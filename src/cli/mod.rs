//! Command-line interface for bookql.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
