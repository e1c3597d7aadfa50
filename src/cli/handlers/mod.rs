mod execute;
mod init;
mod schema;
mod serve;

pub use execute::{handle_mutate, handle_query};
pub use init::handle_init;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookgraphConfig;
use crate::storage::{self, PersistenceGateway};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookgraphConfig,
    pub gateway: Arc<dyn PersistenceGateway>,
}

impl CommandContext {
    pub fn new(config: BookgraphConfig, root: &Path) -> Self {
        let gateway = storage::open_gateway(&config, root);
        Self { config, gateway }
    }

    /// Load the project config, honoring `--config` and `--data-path` overrides.
    pub fn load(config_path: Option<&str>, data_path: Option<&str>) -> Result<Self> {
        let (mut config, root) = match config_path {
            Some(path) => BookgraphConfig::load_from(Path::new(path))
                .with_context(|| format!("Failed to load config from {}", path))?,
            None => {
                let cwd = std::env::current_dir()?;
                BookgraphConfig::load(&cwd).context("Failed to load config")?
            }
        };

        if let Some(path) = data_path {
            config.storage.path = path.to_string();
        }

        Ok(Self::new(config, &root))
    }
}
