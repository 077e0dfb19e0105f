//! Command-line interface for the tic-tac-toe server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ttt_core::Difficulty;

/// Tic-tac-toe session server with a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "ttt_server")]
#[command(about = "Tic-tac-toe over HTTP against humans or minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Host to bind to (overrides the config file)
        #[arg(long, env = "TTT_HOST")]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long, env = "TTT_PORT")]
        port: Option<u16>,

        /// Path to a TOML config file
        #[arg(short, long, env = "TTT_CONFIG")]
        config: Option<PathBuf>,

        /// Difficulty for PVE games that do not choose one
        #[arg(short, long, env = "TTT_DIFFICULTY")]
        difficulty: Option<Difficulty>,
    },

    /// Play engine against engine and print the results
    Selfplay {
        /// Difficulty of the engine playing X
        #[arg(long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty of the engine playing O
        #[arg(long, default_value = "hard")]
        o: Difficulty,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}
