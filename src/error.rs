use async_graphql::ErrorExtensions;
use thiserror::Error;

/// `code` extension for errors the caller caused.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// `code` extension for gateway failures.
pub const PERSISTENCE_FAILURE: &str = "PERSISTENCE_FAILURE";

#[derive(Error, Debug)]
pub enum BookgraphError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Project not initialized. Run 'bookgraph init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl BookgraphError {
    /// Whether the caller, not the server, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, BookgraphError::Validation(_))
    }

    pub fn code(&self) -> &'static str {
        match self {
            BookgraphError::Validation(_) => BAD_USER_INPUT,
            BookgraphError::Storage(_)
            | BookgraphError::Io(_)
            | BookgraphError::Json(_) => PERSISTENCE_FAILURE,
            _ => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for BookgraphError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, BookgraphError>;
