use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name used when `--log-file` points at a directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "bookgraph.log";

/// Filter used when `RUST_LOG` is unset. async-graphql stays at `warn` unless verbose.
pub fn default_filter(verbose: bool) -> String {
    if verbose {
        "bookgraph=debug,async_graphql=info".to_string()
    } else {
        "bookgraph=info,async_graphql=warn".to_string()
    }
}

/// Split `--log-file` into the directory and file-name prefix the daily appender wants.
///
/// A directory (existing, or written with a trailing separator) gets `bookgraph.log`
/// inside it. A bare file name logs into the working directory.
pub fn rolling_target(log_path: &Path) -> (PathBuf, OsString) {
    let names_dir = log_path.is_dir() || log_path.as_os_str().to_string_lossy().ends_with('/');
    match log_path.file_name() {
        Some(name) if !names_dir => {
            let dir = match log_path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            (dir, name.to_os_string())
        }
        _ => (log_path.to_path_buf(), OsString::from(DEFAULT_LOG_FILE_NAME)),
    }
}

/// Initialize logging: compact lines on stderr, plus daily-rotated JSON lines when
/// `log_file` is given.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        subscriber.init();
        return;
    };

    let (dir, file_name) = rolling_target(&log_path);
    if let Err(e) = std::fs::create_dir_all(&dir) {
        subscriber.init();
        tracing::warn!(
            dir = %dir.display(),
            error = %e,
            "Cannot create log directory, logging to stderr only"
        );
        return;
    }

    let file_layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(&dir, &file_name))
        .with_ansi(false)
        .json();

    subscriber.with(file_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewAuthor;
    use crate::storage::{Catalog, MemoryGateway};
    use std::sync::{Arc, Once};
    use tempfile::TempDir;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[tokio::test]
    async fn test_catalog_logs_without_panicking() {
        init_test_logging();
        let catalog = Catalog::new(Arc::new(MemoryGateway::default()));
        let author = catalog
            .add_author(NewAuthor::new("Orwell", 46))
            .await
            .unwrap();
        catalog.remove_author(&author.id).await.unwrap();
    }

    #[test]
    fn test_default_filter_quiets_async_graphql() {
        assert_eq!(default_filter(false), "bookgraph=info,async_graphql=warn");
        assert!(default_filter(true).starts_with("bookgraph=debug"));
        assert!(EnvFilter::try_new(default_filter(true)).is_ok());
    }

    #[test]
    fn test_rolling_target_for_file_path() {
        let (dir, name) = rolling_target(Path::new("logs/server.log"));
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(name, OsString::from("server.log"));
    }

    #[test]
    fn test_rolling_target_for_bare_name_uses_cwd() {
        let (dir, name) = rolling_target(Path::new("server.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, OsString::from("server.log"));
    }

    #[test]
    fn test_rolling_target_for_directory_uses_default_name() {
        let temp_dir = TempDir::new().unwrap();
        let (dir, name) = rolling_target(temp_dir.path());
        assert_eq!(dir, temp_dir.path());
        assert_eq!(name, OsString::from(DEFAULT_LOG_FILE_NAME));

        let (dir, name) = rolling_target(Path::new("logs/"));
        assert_eq!(dir, PathBuf::from("logs/"));
        assert_eq!(name, OsString::from(DEFAULT_LOG_FILE_NAME));
    }
}
