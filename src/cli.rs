//! Command-line interface for hit_and_blow.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hit & Blow - peer-synchronized digit-guessing duels
#[derive(Parser, Debug)]
#[command(name = "hit_and_blow")]
#[command(about = "Two-player Hit & Blow over a message channel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the built-in solver, typing guesses on stdin
    Play {
        /// Seed for your hand and the first mover (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Seed for the solver's hand and choices (random if omitted)
        #[arg(long)]
        opponent_seed: Option<u64>,

        /// Choose your own secret instead, e.g. 042
        #[arg(long)]
        secret: Option<String>,
    },

    /// Watch two solvers play each other
    Watch {
        /// Seed for the opener
        #[arg(long)]
        seed: Option<u64>,

        /// Seed for the joiner
        #[arg(long)]
        opponent_seed: Option<u64>,
    },

    /// Print the hand a seed selects
    Hand {
        /// Seed to look up
        #[arg(long)]
        seed: u64,
    },
}
