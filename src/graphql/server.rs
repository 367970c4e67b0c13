use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::Result;

use super::schema::UserqlSchema;

/// Path the GraphQL endpoint is mounted on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// URL of the GraphQL endpoint as announced at startup.
pub fn endpoint_url(port: u16) -> String {
    format!("http://localhost:{}{}", port, GRAPHQL_PATH)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// POST executes GraphQL requests, GET serves the GraphiQL IDE.
pub fn router(schema: UserqlSchema) -> Router {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get(graphiql).post_service(GraphQL::new(schema)),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serve the schema on an already bound listener until Ctrl-C.
pub async fn run_server(schema: UserqlSchema, listener: TcpListener) -> Result<()> {
    tracing::debug!(addr = ?listener.local_addr()?, "Listening for GraphQL requests");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::debug!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
