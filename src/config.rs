//! Configuration
//!
//! Command-line flags with environment fallbacks for the interactive binary.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Format of the diagnostic log written to stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event, for a terminal session.
    Compact,

    /// One JSON object per event, including the open order span.
    Json,
}

/// Diagnostic logging settings.
///
/// Rejected orders log at `warn`, fulfilled orders at `info`, menu input at `debug`.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level or filter directive
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format for stderr (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Stockroom configuration
#[derive(Debug, Parser)]
#[command(name = "stockroom", about = "Interactive in-memory store", long_about = None)]
pub struct Config {
    /// YAML catalog to stock the store with; the built-in sample catalog when omitted
    #[arg(short, long, env = "STOCKROOM_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
