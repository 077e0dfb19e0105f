//! Route handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use std::sync::Arc;
use tracing::{debug, instrument};
use ttt_core::{SessionError, SessionView};

use crate::AppState;
use crate::error::ApiError;
use crate::types::{HealthResponse, HintResponse, NewGameRequest, PlayRequest};

/// Health probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Plain-text liveness check.
pub async fn hello() -> &'static str {
    "Tic-tac-toe server is running"
}

/// Starts a game.
#[instrument(skip(state, body))]
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewGameRequest>, JsonRejection>,
) -> Result<Json<SessionView>, ApiError> {
    let Json(req) = body?;
    let difficulty = req.difficulty.unwrap_or(*state.default_difficulty());
    debug!(mode = ?req.mode, ai_plays = ?req.ai_plays, %difficulty, "Create game request");
    let view = state
        .service()
        .create_session_with(req.mode, req.ai_plays, difficulty)?;
    Ok(Json(view))
}

/// Reads a game.
#[instrument(skip(state))]
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.service().get_session(&id)?))
}

/// Plays a human move.
#[instrument(skip(state, body))]
pub async fn play(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<PlayRequest>, JsonRejection>,
) -> Result<Json<SessionView>, ApiError> {
    let Json(req) = body?;
    let index = req.validated_index()?;
    Ok(Json(state.service().apply_human_move(&id, index)?))
}

/// Lets the computer move.
#[instrument(skip(state))]
pub async fn ai_move(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let view = search_off_runtime(state, move |state| {
        state.service().apply_computer_move(&id)
    })
    .await?;
    Ok(Json(view))
}

/// Suggests a move for the side to move.
#[instrument(skip(state))]
pub async fn hint(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<HintResponse>, ApiError> {
    let mv = search_off_runtime(state, move |state| state.service().hint(&id)).await?;
    Ok(Json(HintResponse { index: mv.index() }))
}

/// Runs a search-backed operation on the blocking pool.
async fn search_off_runtime<T, F>(state: Arc<AppState>, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&AppState) -> Result<T, SessionError> + Send + 'static,
{
    let span = tracing::Span::current();
    tokio::task::spawn_blocking(move || span.in_scope(|| f(&state)))
        .await
        .map_err(|e| ApiError::internal(format!("search task failed: {}", e)))?
        .map_err(ApiError::from)
}
