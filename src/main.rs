use anyhow::{Context, Result};
use clap::Parser;

use bookql::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookql::cli::{Cli, Commands};
use bookql::config::BookqlConfig;
use bookql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let config = BookqlConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;
    let log_file = cli.log_file.or_else(|| config.logging.file.clone());
    logging::init(cli.verbose, log_file).context("Failed to initialize logging")?;
    tracing::debug!(?config, "Configuration loaded");

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Init => handle_init(&cwd),
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
