use crate::config::{ServerSettings, StorageBackend};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bookgraph")]
#[command(
    author,
    version,
    about = "A GraphQL catalog of authors and books backed by a document store"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookgraph.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to data directory (overrides config)
    #[arg(long, global = true)]
    pub data_path: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "BOOKGRAPH_LOG_FILE")]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new bookgraph project in the current directory
    Init {
        /// Storage backend
        #[arg(long, value_enum, default_value = "file")]
        backend: BackendArg,

        /// Default port for `serve`
        #[arg(long, default_value_t = ServerSettings::default().port)]
        port: u16,
    },

    /// Start GraphQL HTTP server
    Serve {
        /// Port to listen on (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not serve GraphiQL on GET /graphql
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query document
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BackendArg {
    File,
    Memory,
}

impl From<BackendArg> for StorageBackend {
    fn from(b: BackendArg) -> Self {
        match b {
            BackendArg::File => StorageBackend::File,
            BackendArg::Memory => StorageBackend::Memory,
        }
    }
}
