use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Force DEBUG logging regardless of `level`
/// * `level` - Default level for bookshelf events when `RUST_LOG` is unset
/// * `log_file` - Optional path to a JSON log file, rotated daily. If None, logs only to stderr
pub fn init(verbose: bool, level: &str, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let directory = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("bookshelf.log"));
        let file_appender = tracing_appender::rolling::daily(directory, file_name);

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

/// Filter directive used when `RUST_LOG` is not set
fn default_directive(verbose: bool, level: &str) -> String {
    let level = if verbose { "debug" } else { level };
    format!("bookshelf={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize logging once for all tests
    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[test]
    fn test_default_directive_uses_level() {
        assert_eq!(default_directive(false, "info"), "bookshelf=info");
        assert_eq!(default_directive(false, "warn"), "bookshelf=warn");
    }

    #[test]
    fn test_verbose_overrides_level() {
        assert_eq!(default_directive(true, "warn"), "bookshelf=debug");
    }

    #[test]
    fn test_default_directive_parses_as_filter() {
        init_test_logging();
        assert!(EnvFilter::try_new(default_directive(false, "info")).is_ok());
        assert!(EnvFilter::try_new(default_directive(true, "info")).is_ok());
    }
}
