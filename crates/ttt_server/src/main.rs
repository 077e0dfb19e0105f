//! Tic-tac-toe server binary.

use anyhow::Result;
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_core::{Board, Difficulty, Mark, Minimax, play_match};
use ttt_server::cli::{Cli, Command};
use ttt_server::{AppState, ServerConfig, create_app};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            config,
            difficulty,
        } => run_server(config, host, port, difficulty).await,
        Command::Selfplay { x, o, games } => run_selfplay(x, o, games),
    }
}

fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

/// Run the HTTP game server
async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    let config =
        ServerConfig::load(config_path.as_deref())?.with_overrides(host, port, difficulty);
    init_tracing(config.log_level());

    info!(
        host = %config.host(),
        port = config.port(),
        default_difficulty = %config.default_difficulty(),
        "Starting tic-tac-toe server"
    );

    let state = Arc::new(AppState::in_memory(*config.default_difficulty()));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(addr = %listener.local_addr()?, "Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    info!("Shutdown signal received, stopping server...");
}

/// Play engine against engine
fn run_selfplay(x: Difficulty, o: Difficulty, games: u32) -> Result<()> {
    init_tracing("warn");

    let mut tally: BTreeMap<&'static str, u32> = BTreeMap::new();
    for game in 1..=games {
        let mut x_engine = Minimax::with_difficulty(x, Mark::X)?;
        let mut o_engine = Minimax::with_difficulty(o, Mark::O)?;
        let (state, moves) = play_match(&mut x_engine, &mut o_engine, Board::new())?;

        let line: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        println!("Game {} ({} vs {}): {}", game, x, o, line.join(" "));
        println!("{}", state.board().display());
        println!("Result: {}\n", state.outcome().tag());
        *tally.entry(state.outcome().tag()).or_default() += 1;
    }

    for (outcome, count) in &tally {
        println!("{}: {}", outcome, count);
    }
    Ok(())
}
