//! abak — interactive console calculator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use abak::config::Config;
use abak::constants;
use abak::env::Env;
use abak::history::HistoryLog;
use abak::session;

use cli::args::{Cli, Command, HistoryAction};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let cwd = std::env::current_dir().context("не удалось определить рабочий каталог")?;
    let mut config =
        Config::load(Some(&cwd), &Env::real()).context("не удалось загрузить конфигурацию")?;

    // Layer 1: CLI flags take priority over everything loaded so far.
    if let Some(path) = cli.history_file {
        config.history.path = path;
    }
    if cli.no_color {
        config.ui.color = false;
    }
    if !config.ui.color {
        colored::control::set_override(false);
    }

    match cli.command {
        None => run_calculator(&config),
        Some(Command::History { action }) => run_history(action, &config),
        Some(Command::Version) => run_version(),
    }
}

/// Drive the interactive session over real stdin/stdout.
fn run_calculator(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(config, stdin.lock(), stdout.lock()).context("сеанс калькулятора прерван")
}

/// Inspect the history file without starting a session.
fn run_history(action: HistoryAction, config: &Config) -> Result<()> {
    use colored::Colorize;

    let log = HistoryLog::new(config.history.path.clone());

    match action {
        HistoryAction::Show => {
            let entries = log.entries().context("не удалось прочитать историю")?;
            if entries.is_empty() {
                println!("История пуста.");
            } else {
                for line in &entries {
                    println!("{line}");
                }
            }
        }
        HistoryAction::Path => {
            println!("{}", log.path().display());
        }
        HistoryAction::Stats => {
            let count = log.count().context("не удалось прочитать историю")?;
            println!("Записей в истории: {}", count.to_string().bold());
        }
    }

    Ok(())
}

/// Print name and version.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}
