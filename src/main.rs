//! Pomodoro Timer - terminal countdown with a reorderable task list
//!
//! Runs focus and break intervals in the terminal, with a task list that can
//! be reordered by dragging rows and a dark/light display toggle.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use pomodoro_tui::config::{Config, ThemeMode};
use pomodoro_tui::constants::{APP_BINARY_NAME, APP_NAME};
use pomodoro_tui::{logging, tui};

/// Pomodoro Timer - terminal countdown with a reorderable task list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured theme
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Start with this task in the list (repeatable)
    #[arg(long = "task", value_name = "TEXT")]
    tasks: Vec<String>,

    /// Append diagnostic events to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path, cli.verbose)?;
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_file_path()?,
    };
    let mut config = Config::load_from(&config_path).with_context(|| {
        format!(
            "Invalid configuration. Fix or remove {} and run {} again",
            config_path.display(),
            APP_BINARY_NAME
        )
    })?;

    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme;
    }

    if cli.write_config {
        config.save_to(&config_path)?;
        println!("{APP_NAME}: wrote {}", config_path.display());
        return Ok(());
    }

    tracing::info!(config = %config_path.display(), "starting");

    let mut app_state = tui::AppState::new(config);
    for task in cli.tasks {
        app_state.add_task(task);
    }
    app_state.set_status("");

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    tracing::info!("exiting");

    // Check for errors
    result
}
