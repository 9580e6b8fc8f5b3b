//! Command-line interface parsing for the Commons menu widget
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated `StartupConfig`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::cache::DEFAULT_NAMESPACE;
use crate::data::DEFAULT_BASE_URL;
use crate::snapshot::MenuConfig;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The hour override is outside 0-23
    #[error("Invalid hour: {0}. Expected a value from 0 to 23")]
    InvalidHour(u32),

    /// A zero timeout would fail every request
    #[error("Invalid timeout: must be at least 1 second")]
    ZeroTimeout,
}

/// Commons Menu - show what the Commons dining hall is serving right now
#[derive(Parser, Debug)]
#[command(name = "commons-menu")]
#[command(about = "Current Commons dining hall menu as a terminal widget")]
#[command(version)]
pub struct Cli {
    /// Base URL of the menu API
    #[arg(long, env = "COMMONS_MENU_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory for cached state (defaults to the platform cache directory)
    #[arg(long, env = "COMMONS_MENU_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Store identifier the freshness record is kept under
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Pick the meal as if the local hour were HOUR
    ///
    /// The freshness record still stores the real time.
    ///
    /// Examples:
    ///   commons-menu --hour 8    # Breakfast
    ///   commons-menu --hour 12   # Lunch
    ///   commons-menu --hour 18   # Dinner
    #[arg(long, value_name = "HOUR")]
    pub hour: Option<u32>,

    /// Give up on the menu request after SECS seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the snapshot as JSON instead of drawing the widget
    #[arg(long)]
    pub json: bool,

    /// Keep the freshness record in memory only
    #[arg(long)]
    pub no_cache: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the snapshot is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Widget,
    Json,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Menu API settings, including the hour override for meal resolution
    pub menu: MenuConfig,
    /// Root directory for the file store, if overridden
    pub cache_dir: Option<PathBuf>,
    pub namespace: String,
    pub timeout: Option<Duration>,
    pub output: OutputMode,
    /// Whether the freshness record is persisted between runs
    pub persist_cache: bool,
    pub verbose: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            menu: MenuConfig::default(),
            cache_dir: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            timeout: None,
            output: OutputMode::default(),
            persist_cache: true,
            verbose: false,
        }
    }
}

/// Validates an hour override
pub fn parse_hour_arg(hour: u32) -> Result<u32, CliError> {
    if hour < 24 {
        Ok(hour)
    } else {
        Err(CliError::InvalidHour(hour))
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if the hour or timeout is out of range
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let hour = cli.hour.map(parse_hour_arg).transpose()?;

        let timeout = match cli.timeout {
            Some(0) => return Err(CliError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(StartupConfig {
            menu: MenuConfig {
                base_url: cli.base_url.clone(),
                hour,
            },
            cache_dir: cli.cache_dir.clone(),
            namespace: cli.namespace.clone(),
            timeout,
            output: if cli.json {
                OutputMode::Json
            } else {
                OutputMode::Widget
            },
            persist_cache: !cli.no_cache,
            verbose: cli.verbose,
        })
    }
}
