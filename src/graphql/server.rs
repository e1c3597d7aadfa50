use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, post_service},
};

use super::schema::BookgraphSchema;
use crate::error::Result;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// `POST /graphql` executes requests; `GET /graphql` serves GraphiQL when enabled.
pub fn router(schema: BookgraphSchema, enable_graphiql: bool) -> Router {
    let service = GraphQL::new(schema);
    let route = if enable_graphiql {
        get(graphiql).post_service(service)
    } else {
        post_service(service)
    };
    Router::new().route(GRAPHQL_PATH, route)
}

pub async fn run_server(schema: BookgraphSchema, port: u16, enable_graphiql: bool) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        graphiql = enable_graphiql,
        "GraphQL server listening"
    );
    axum::serve(listener, router(schema, enable_graphiql)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::build_schema;
    use crate::storage::MemoryGateway;
    use std::sync::Arc;

    #[test]
    fn test_router_builds_with_and_without_graphiql() {
        let schema = build_schema(Arc::new(MemoryGateway::default()));
        let _with = router(schema.clone(), true);
        let _without = router(schema, false);
    }

    #[tokio::test]
    async fn test_run_server_reports_bind_failure() {
        let taken = tokio::net::TcpListener::bind(("0.0.0.0", 0)).await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let schema = build_schema(Arc::new(MemoryGateway::default()));
        let err = run_server(schema, port, false).await.unwrap_err();
        assert!(matches!(err, crate::error::BookgraphError::Io(_)));
    }
}
