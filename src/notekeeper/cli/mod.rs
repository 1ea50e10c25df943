//! Terminal front end: argument parsing, logging setup, and the interactive menu loop.

mod args;
mod console;
mod logging;
mod menu;
mod session;

use args::Cli;
use clap::Parser;
use console::Console;
use directories::ProjectDirs;
use notekeeper::api::NotekeeperApi;
use notekeeper::config::NotekeeperConfig;
use notekeeper::error::Result;
use session::Session;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

const HOME_ENV: &str = "NOTEKEEPER_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;
    info!(locale = %config.locale, "starting session");

    let api = NotekeeperApi::new(config.labels());
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    Session::new(api, console, config.timestamp_format).run()
}

fn load_config(cli: &Cli) -> Result<NotekeeperConfig> {
    let mut config = match config_dir(cli) {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            NotekeeperConfig::load(&dir)?
        }
        None => NotekeeperConfig::default(),
    };
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    Ok(config)
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Some(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "notekeeper", "notekeeper").map(|dirs| dirs.config_dir().to_path_buf())
}
