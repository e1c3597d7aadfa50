use crate::graphql::build_schema;
use crate::storage::MemoryGateway;
use anyhow::Result;
use std::sync::Arc;

/// Print the schema SDL. Needs no project, so it runs against an empty in-memory store.
pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(MemoryGateway::default()));
    println!("{}", schema.sdl());
    Ok(())
}
