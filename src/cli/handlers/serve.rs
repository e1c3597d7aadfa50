use crate::config::StorageBackend;
use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, no_graphiql: bool) -> Result<()> {
    let port = port.unwrap_or(ctx.config.server.port);
    let graphiql = ctx.config.server.graphiql && !no_graphiql;

    if ctx.config.storage.backend == StorageBackend::Memory {
        tracing::warn!("Using in-memory storage; data is lost when the server stops");
    }

    tracing::info!(
        backend = ?ctx.config.storage.backend,
        port,
        graphiql,
        "Serving catalog"
    );
    let schema = build_schema(ctx.gateway);

    println!(
        "Starting GraphQL server on http://localhost:{}{}",
        port, GRAPHQL_PATH
    );
    if graphiql {
        println!("GraphiQL: http://localhost:{}{}", port, GRAPHQL_PATH);
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, port, graphiql))?;
    Ok(())
}
