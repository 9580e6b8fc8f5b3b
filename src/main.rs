//! Commons Menu - show what the Commons dining hall is serving right now
//!
//! Each run picks the meal being served from the local time, fetches that
//! meal's menu, records the check in the cache and draws a small widget.

use std::io::IsTerminal;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commons_menu::cache::{FileStore, KeyValueStore, MemoryStore};
use commons_menu::cli::{Cli, OutputMode, StartupConfig};
use commons_menu::data::MenuClient;
use commons_menu::snapshot;
use commons_menu::ui::{JsonPresenter, PlainPresenter, Presenter, TerminalPresenter};

/// Sets up logging on stderr so stdout only carries the widget
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(config: StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut store: Box<dyn KeyValueStore> = if !config.persist_cache {
        Box::new(MemoryStore::new())
    } else if let Some(dir) = &config.cache_dir {
        Box::new(FileStore::with_dir(dir, &config.namespace))
    } else {
        Box::new(FileStore::new(&config.namespace)?)
    };

    let fetcher = match config.timeout {
        Some(timeout) => MenuClient::with_timeout(timeout)?,
        None => MenuClient::new(),
    };

    let mut presenter: Box<dyn Presenter> = match config.output {
        OutputMode::Widget if std::io::stdout().is_terminal() => Box::new(TerminalPresenter),
        OutputMode::Widget => Box::new(PlainPresenter::new(std::io::stdout())),
        OutputMode::Json => Box::new(JsonPresenter::new(std::io::stdout())),
    };

    snapshot::run(
        Local::now(),
        store.as_mut(),
        &fetcher,
        &config.menu,
        presenter.as_mut(),
    )
    .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.verbose);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
