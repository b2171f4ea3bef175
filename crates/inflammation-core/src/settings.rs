use clap::Parser;
use std::path::PathBuf;

/// Default glob for inflammation data files inside the data directory.
pub const DEFAULT_PATTERN: &str = "inflammation*.csv";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Per-day statistics over patient inflammation records
#[derive(Parser, Debug, Clone)]
#[command(
    name = "inflammation",
    about = "Per-day statistics over patient inflammation records",
    version
)]
pub struct Settings {
    /// Directory containing the inflammation CSV files
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Analysis to run
    #[arg(long, default_value = "analyse", value_parser = ["analyse", "visualize"])]
    pub view: String,

    /// Normalise each patient before computing per-file statistics
    #[arg(long)]
    pub normalise: bool,

    /// File-name glob selecting data files
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Where results go
    #[arg(long, default_value = "tui", value_parser = ["tui", "json"])]
    pub output: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply flag overrides.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`load`](Self::load) but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve_overrides(Settings::parse_from(args))
    }

    /// Apply the `--debug` flag.
    fn resolve_overrides(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Whether the per-file summary view was requested.
    pub fn is_visualize_view(&self) -> bool {
        self.view == "visualize"
    }

    /// Whether results should be written as JSON instead of drawn.
    pub fn is_json_output(&self) -> bool {
        self.output == "json"
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
