//! Command-line argument types.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cabo",
    version,
    about = "CABO card game: play against computer opponents, simulate, inspect deals"
)]
pub struct CaboCli {
    /// Tracing filter for diagnostics on stderr (overrides RUST_LOG), e.g. "debug"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game against three computer opponents
    Play {
        #[arg(long)]
        seed: Option<u64>,
        /// Name of your seat
        #[arg(long)]
        name: Option<String>,
        /// Computer opponent kind
        #[arg(long)]
        ai: Option<String>,
        /// Show every card face-up
        #[arg(long)]
        reveal_all: bool,
    },
    /// Play many all-computer games and report results
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
    },
    /// Deal an opening table and show it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Dump the table snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a fresh deck and check its composition
    CheckDeck {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    /// Subcommand names, as typed on the command line.
    pub const NAMES: &'static [&'static str] = &["play", "sim", "deal", "check-deck", "cfg"];
}
