//! Process exit codes returned by [`crate::run`].

use crate::error::CliError;

pub const SUCCESS: i32 = 0;

/// Usage errors, bad configuration, engine or I/O failures.
pub const ERROR: i32 = 2;

/// Input closed before the game finished, as for SIGINT.
pub const INTERRUPTED: i32 = 130;

/// Exit code for a failed command.
pub fn for_error(e: &CliError) -> i32 {
    match e {
        CliError::Interrupted(_) => INTERRUPTED,
        _ => ERROR,
    }
}
