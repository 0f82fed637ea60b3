use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Router, extract::State, routing::get};
use tokio::net::TcpListener;

use super::BookqlSchema;
use crate::error::Result;

async fn graphql_handler(
    State(schema): State<BookqlSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Router answering GraphQL requests on `path`, as POST bodies or GET query strings.
pub fn router(schema: BookqlSchema, path: &str) -> Router {
    Router::new()
        .route(path, get(graphql_handler).post(graphql_handler))
        .with_state(schema)
}

/// Serve `schema` on `host:port` until Ctrl-C is received.
pub async fn run_server(schema: BookqlSchema, host: &str, port: u16, path: &str) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, path, "GraphQL server listening");

    axum::serve(listener, router(schema, path))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
