use crate::graphql::build_schema;
use anyhow::{Context, Result};

use super::CommandContext;

fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(async_graphql::Variables::default()),
    }
}

async fn execute(ctx: CommandContext, document: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.gateway);
    let request = async_graphql::Request::new(document).variables(parse_variables(variables)?);
    let response = schema.execute(request).await;

    for error in &response.errors {
        tracing::debug!(error = %error.message, "GraphQL error");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    tokio::runtime::Runtime::new()?.block_on(execute(ctx, query, variables))
}

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    tokio::runtime::Runtime::new()?.block_on(execute(ctx, document, variables))
}
