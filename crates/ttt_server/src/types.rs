//! Request and response bodies.

use serde::{Deserialize, Serialize};
use ttt_core::{CELL_COUNT, Difficulty, Mark, Mode};

use crate::error::ApiError;

/// Body of `POST /api/games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    /// `PVP` or `PVE`.
    pub mode: Mode,
    /// Side the computer plays; `null` or absent for PVP.
    #[serde(default)]
    pub ai_plays: Option<Mark>,
    /// Search preset; the server default when absent.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// Body of `POST /api/games/{id}/play`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRequest {
    /// Cell to mark, 0-8.
    pub index: usize,
}

impl PlayRequest {
    /// Rejects indices off the board before they reach the session.
    pub fn validated_index(&self) -> Result<usize, ApiError> {
        if self.index >= CELL_COUNT {
            return Err(ApiError::bad_request(format!(
                "index must be between 0 and {}",
                CELL_COUNT - 1
            )));
        }
        Ok(self.index)
    }
}

/// Body of `GET /api/games/{id}/hint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResponse {
    /// Suggested cell.
    pub index: usize,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}
