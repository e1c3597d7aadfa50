use crate::error::{BookgraphError, Result};
use crate::validation::MAX_ID_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookgraph.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookgraphConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ids: IdSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON documents on disk, one file per collection
    #[default]
    File,
    /// Process-local, lost on exit
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    ".bookgraph".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_port() -> u16 {
    4000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdSettings {
    #[serde(default = "default_id_length")]
    pub length: usize,
}

fn default_id_length() -> usize {
    12
}

impl Default for IdSettings {
    fn default() -> Self {
        Self {
            length: default_id_length(),
        }
    }
}

impl BookgraphConfig {
    /// Load the config found by searching upward from `start_path`.
    ///
    /// Returns the config together with the project root (the directory holding the file).
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: BookgraphConfig = toml::from_str(&content)?;
        config.validate()?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| {
                BookgraphError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(BookgraphError::NotInitialized);
            }
        }
    }

    /// Shortest id length accepted in `[ids] length`.
    pub const MIN_ID_LENGTH: usize = 4;

    fn validate(&self) -> Result<()> {
        // Generated ids must pass `validation::validate_id`
        if !(Self::MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&self.ids.length) {
            return Err(BookgraphError::Config(format!(
                "ids.length must be between {} and {}, got {}",
                Self::MIN_ID_LENGTH,
                MAX_ID_LENGTH,
                self.ids.length
            )));
        }
        if self.storage.path.is_empty() {
            return Err(BookgraphError::Config(
                "storage.path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.storage.path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
