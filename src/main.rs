use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use bookgraph::cli::handlers::{self, CommandContext};
use bookgraph::cli::{Cli, Commands};
use bookgraph::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    match cli.command {
        Commands::Init { backend, port } => handlers::handle_init(backend, port, cli.data_path),
        Commands::Schema => handlers::handle_schema(),
        Commands::Serve { port, no_graphiql } => {
            let ctx = CommandContext::load(cli.config.as_deref(), cli.data_path.as_deref())?;
            handlers::handle_serve(ctx, port, no_graphiql)
        }
        Commands::Query { query, variables } => {
            let ctx = CommandContext::load(cli.config.as_deref(), cli.data_path.as_deref())?;
            handlers::handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = CommandContext::load(cli.config.as_deref(), cli.data_path.as_deref())?;
            handlers::handle_mutate(ctx, mutation, variables)
        }
    }
}
