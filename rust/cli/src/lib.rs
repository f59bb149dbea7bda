//! # CABO CLI Library
//!
//! This library provides the command-line interface for the CABO card game
//! engine. It exposes subcommands for playing a game at the terminal,
//! simulating computer-only games, and inspecting deals.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same with an
//! explicit input stream for the interactive `play` command.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cabo", "play", "--seed", "42"];
//! let code = cabo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game against three computer opponents
//! - `sim`: Play many all-computer games and tally the winners
//! - `deal`: Deal an opening table for inspection
//! - `check-deck`: Verify the composition of a shuffled deck
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{CaboCli, Commands};
use commands::{
    PlayOptions, handle_cfg_command, handle_check_deck_command, handle_deal_command,
    handle_play_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// The `play` command reads its moves from the process's standard input.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["cabo", "deal", "--seed", "42"];
/// let code = cabo_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], reading interactive input from `stdin`.
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new("q\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let code = cabo_cli::run_with_input(
///     ["cabo", "play", "--seed", "7"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Quit."));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CaboCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e);
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.log_level.as_deref());

    let result = match cli.cmd {
        Commands::Play {
            seed,
            name,
            ai,
            reveal_all,
        } => {
            let opts = PlayOptions {
                seed,
                name,
                ai,
                reveal_all,
            };
            handle_play_command(opts, out, err, stdin)
        }
        Commands::Sim { games, seed, ai } => handle_sim_command(games, seed, ai, out),
        Commands::Deal { seed, json } => handle_deal_command(seed, json, out),
        Commands::CheckDeck { seed } => handle_check_deck_command(seed, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = match &e {
                CliError::Interrupted(msg) => writeln!(err, "Interrupted: {}", msg),
                other => ui::write_error(err, &other.to_string()),
            };
            exit_code::for_error(&e)
        }
    }
}

/// Clap's message followed by the list of subcommands.
fn write_usage(err: &mut dyn Write, e: &clap::Error) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err, "CABO card game CLI")?;
    writeln!(err, "Usage: cabo <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in Commands::NAMES {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: cabo --help")
}
