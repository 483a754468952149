use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{LibrisError, Result};

const DEFAULT_LOG_NAME: &str = "libris.log";

/// Installs the global subscriber.
///
/// Events go to stderr in compact form. With `log_file` set they are also
/// written as JSON to a daily-rotated file whose name is prefixed by the
/// file name of `log_file`. `RUST_LOG` replaces the default filter.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let result = match log_file {
        Some(path) => {
            let file_layer = fmt::layer()
                .with_writer(file_appender(&path)?)
                .with_ansi(false)
                .json();
            subscriber.with(file_layer).try_init()
        }
        None => subscriber.try_init(),
    };

    result.map_err(|e| LibrisError::Logging(e.to_string()))
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let prefix = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_NAME.to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
        .map_err(|e| LibrisError::Logging(format!("cannot open log file {}: {e}", path.display())))
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("libris={level},tower_http={level}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directive_info() {
        assert_eq!(default_directive(false), "libris=info,tower_http=info");
    }

    #[test]
    fn test_default_directive_verbose() {
        assert_eq!(default_directive(true), "libris=debug,tower_http=debug");
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("libris.log");
        assert!(file_appender(&path).is_ok());
        assert!(temp_dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_file_appender_unwritable_directory() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the log directory should be
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = file_appender(&blocker.join("libris.log"));
        assert!(matches!(result, Err(LibrisError::Logging(msg)) if msg.contains("cannot open log file")));
    }
}
