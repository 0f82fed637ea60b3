mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookqlConfig;
use crate::graphql::{BookqlSchema, build_schema};
use crate::storage::RecordStore;
use anyhow::Result;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookqlConfig,
    pub store: RecordStore,
}

impl CommandContext {
    pub fn new(config: BookqlConfig) -> Self {
        let store = if config.store.seed {
            RecordStore::seeded()
        } else {
            RecordStore::new()
        };
        Self { config, store }
    }

    pub fn schema(&self) -> BookqlSchema {
        build_schema(self.store.clone())
    }
}

/// Parse `--variables` JSON, defaulting to no variables
fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    Ok(match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    })
}

/// Run a request in-process and print the JSON response
fn execute_and_print(
    schema: &BookqlSchema,
    query: &str,
    variables: Option<String>,
) -> Result<()> {
    let request = async_graphql::Request::new(query).variables(parse_variables(variables)?);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if !response.errors.is_empty() {
        tracing::debug!(count = response.errors.len(), "Request returned errors");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
