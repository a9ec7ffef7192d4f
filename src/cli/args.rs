//! Clap argument types.
//!
//! The default invocation (no subcommand) starts the interactive
//! calculator; the subcommands are maintenance surfaces over the same
//! configuration.

use clap::Parser;
use std::path::PathBuf;

/// Интерактивный консольный калькулятор с текстовой историей.
#[derive(Parser, Debug)]
#[command(
    name = "abak",
    version = abak::constants::VERSION,
    about = "Интерактивный консольный калькулятор с текстовой историей"
)]
pub struct Cli {
    /// Переопределить путь к файлу истории.
    #[arg(long, global = true, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Отключить цветной вывод.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Работа с файлом истории.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Показать версию.
    Version,
}

/// History maintenance subcommands. Read-only: the program never
/// updates or deletes recorded lines.
#[derive(clap::Subcommand, Debug)]
pub enum HistoryAction {
    /// Показать записанную историю.
    Show,
    /// Показать путь к файлу истории.
    Path,
    /// Показать количество записей.
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_the_interactive_run() {
        let cli = Cli::try_parse_from(["abak"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.history_file.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn history_file_flag_parsed() {
        let cli = Cli::try_parse_from(["abak", "--history-file", "/tmp/h.txt"]).unwrap();
        assert_eq!(cli.history_file, Some(PathBuf::from("/tmp/h.txt")));
    }

    #[test]
    fn no_color_flag_parsed() {
        let cli = Cli::try_parse_from(["abak", "--no-color"]).unwrap();
        assert!(cli.no_color);
    }

    #[test]
    fn history_subcommands_parse() {
        let cli = Cli::try_parse_from(["abak", "history", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::History {
                action: HistoryAction::Show
            })
        ));

        let cli = Cli::try_parse_from(["abak", "history", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::History {
                action: HistoryAction::Path
            })
        ));

        let cli = Cli::try_parse_from(["abak", "history", "stats"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::History {
                action: HistoryAction::Stats
            })
        ));
    }

    #[test]
    fn global_flag_works_after_subcommand() {
        let cli =
            Cli::try_parse_from(["abak", "history", "path", "--history-file", "x.txt"]).unwrap();
        assert_eq!(cli.history_file, Some(PathBuf::from("x.txt")));
    }

    #[test]
    fn version_subcommand_parses() {
        let cli = Cli::try_parse_from(["abak", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Version)));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["abak", "frobnicate"]).is_err());
    }
}
