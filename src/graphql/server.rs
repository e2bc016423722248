use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::error::Result;

use super::schema::BookshelfSchema;

/// Routes for the GraphQL endpoint at `/`.
///
/// POST always executes. GET serves GraphiQL when `playground` is set, and
/// otherwise executes the query passed in the query string.
pub fn router(schema: BookshelfSchema, playground: bool) -> Router {
    let endpoint = if playground {
        get(graphiql).post(graphql_handler)
    } else {
        get(graphql_handler).post(graphql_handler)
    };

    Router::new().route("/", endpoint).with_state(schema)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn run_server(
    schema: BookshelfSchema,
    addr: SocketAddr,
    playground: bool,
) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(address = %local_addr, playground, "GraphQL server listening");

    axum::serve(listener, router(schema, playground))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("GraphQL server stopped");
    Ok(())
}

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    debug!(
        operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
        "executing GraphQL request"
    );

    let response = schema.execute(request).await;
    if response.is_err() {
        debug!(errors = response.errors.len(), "GraphQL request rejected");
    }
    response.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
