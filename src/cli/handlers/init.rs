use crate::cli::BackendArg;
use crate::config::{BookgraphConfig, CONFIG_FILE_NAME, StorageBackend};
use crate::error::BookgraphError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(backend: BackendArg, port: u16, data_path: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        let existing = config_path.display().to_string();
        return Err(BookgraphError::AlreadyInitialized(existing).into());
    }

    let mut config = BookgraphConfig::default();
    config.storage.backend = backend.into();
    config.server.port = port;
    if let Some(path) = data_path {
        config.storage.path = path;
    }

    let data_path = config.data_path(&cwd);
    if config.storage.backend == StorageBackend::File {
        std::fs::create_dir_all(&data_path)?;
    }

    config.save(&config_path)?;

    println!(
        "{} bookgraph project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
