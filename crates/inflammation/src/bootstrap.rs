use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a Python-style level name to an [`EnvFilter`] directive.
///
/// Unknown names fall back to `"warn"`.
pub fn log_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" | "WARN" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "warn",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Output goes to `log_file` (appended, no ANSI colours) when given,
/// otherwise to stderr. `RUST_LOG` overrides `log_level` when set.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(log_level)));

    let (stderr_layer, file_layer) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(false);
            (None, Some(layer))
        }
        None => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false);
            (Some(layer), None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_directive_maps_python_levels() {
        assert_eq!(log_directive("DEBUG"), "debug");
        assert_eq!(log_directive("INFO"), "info");
        assert_eq!(log_directive("WARNING"), "warn");
        assert_eq!(log_directive("ERROR"), "error");
        assert_eq!(log_directive("CRITICAL"), "error");
    }

    #[test]
    fn test_log_directive_is_case_insensitive() {
        assert_eq!(log_directive("debug"), "debug");
        assert_eq!(log_directive("Warning"), "warn");
    }

    #[test]
    fn test_log_directive_unknown_falls_back_to_warn() {
        assert_eq!(log_directive("VERBOSE"), "warn");
        assert_eq!(log_directive(""), "warn");
    }

    #[test]
    fn test_setup_logging_creates_log_file() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("inflammation.log");

        // Only one global subscriber per process; a second init may fail but
        // the file must still be created before that point.
        let _ = setup_logging("INFO", Some(&path));
        assert!(path.is_file(), "log file must exist");
    }

    #[test]
    fn test_setup_logging_unwritable_path_errors() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("missing").join("inflammation.log");
        assert!(setup_logging("INFO", Some(&path)).is_err());
    }
}
