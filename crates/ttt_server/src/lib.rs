//! HTTP transport for tic-tac-toe sessions.
//!
//! Endpoints:
//! - GET  /health                  - Health check
//! - GET  /hello                   - Liveness text
//! - POST /api/games               - Start a game
//! - GET  /api/games/{id}          - Read a game
//! - POST /api/games/{id}/play     - Human move
//! - POST /api/games/{id}/ai-move  - Computer move
//! - GET  /api/games/{id}/hint     - Suggested move

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod types;

use axum::Router;
use axum::routing::{get, post};
use derive_getters::Getters;
use derive_new::new;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use ttt_core::{Difficulty, GameService, InMemorySessionStore};

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// Shared application state.
#[derive(Debug, Clone, Getters, new)]
pub struct AppState {
    /// Session operations.
    service: GameService<InMemorySessionStore>,
    /// Difficulty for PVE games created without one.
    default_difficulty: Difficulty,
}

impl AppState {
    /// State over an empty in-memory store.
    pub fn in_memory(default_difficulty: Difficulty) -> Self {
        Self::new(GameService::in_memory(), default_difficulty)
    }
}

/// Builds the router over `state`.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/hello", get(handlers::hello))
        .route("/api/games", post(handlers::create_game))
        .route("/api/games/{id}", get(handlers::get_game))
        .route("/api/games/{id}/play", post(handlers::play))
        .route("/api/games/{id}/ai-move", post(handlers::ai_move))
        .route("/api/games/{id}/hint", get(handlers::hint))
        .layer(cors)
        .with_state(state)
}
