//! # Chessort CLI Library
//!
//! Command-line front end for the chessort tournament organizer. It reads a
//! player list, splits it into groups and prints a round-robin schedule for
//! every group.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["chessort", "draw", "players.txt", "-n", "3", "--seed", "7"];
//! let code = chessort_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `draw`: Split a player list into groups and draw their rounds
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{ChessortCli, Commands};
use commands::{handle_cfg_command, handle_draw_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["draw", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success (including `--help` and `--version`), `1` for
/// any argument, input or configuration error.
///
/// # Example
///
/// ```
/// use std::io;
/// let code = chessort_cli::run(vec!["chessort", "--version"], &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ChessortCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: chessort <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: chessort --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Draw(args) => handle_draw_command(args, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["chessort", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        let stdout = String::from_utf8_lossy(&out);
        assert!(stdout.contains("draw"));
        assert!(stdout.contains("cfg"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_missing_subcommand_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["chessort"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8_lossy(&err);
        assert!(stderr.contains("Commands:"));
        assert!(stderr.contains("  draw"));
        assert!(out.is_empty());
    }
}
