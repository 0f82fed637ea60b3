use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use crate::graphql::run_server;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let path = ctx.config.server.path.clone();
    let schema = ctx.schema();

    println!(
        "{} http://{}:{}{}",
        "Starting GraphQL server on".green(),
        host,
        port,
        path.cyan()
    );

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, &host, port, &path))
        .with_context(|| format!("GraphQL server on {}:{} failed", host, port))?;
    Ok(())
}
