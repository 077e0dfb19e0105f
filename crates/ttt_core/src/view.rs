//! External projection of a session.

use crate::session::Session;
use serde::{Deserialize, Serialize};

/// Flat, serializable snapshot of a session for transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Session identifier.
    pub game_id: String,
    /// Nine glyphs over `X`, `O` and `.`, e.g. `XO..O.X..`.
    pub board: String,
    /// `X` or `O`.
    pub to_move: String,
    /// `IN_PROGRESS`, `X_WIN`, `O_WIN` or `DRAW`.
    pub status: String,
    /// `X`, `O`, or empty when nobody has won.
    pub winner: String,
    /// `PVP` or `PVE`.
    pub mode: String,
    /// Side the computer plays, or empty.
    pub ai_plays: String,
    /// Difficulty used for computer moves.
    pub difficulty: String,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let board = session.board();
        let outcome = session.outcome();
        Self {
            game_id: session.id().to_string(),
            board: board.encode(),
            to_move: board.to_move().side_tag().to_string(),
            status: outcome.tag().to_string(),
            winner: outcome.winner_mark().side_tag().to_string(),
            mode: session.mode().tag().to_string(),
            ai_plays: (*session.computer_side())
                .map(|m| m.side_tag())
                .unwrap_or_default()
                .to_string(),
            difficulty: session.difficulty().to_string(),
        }
    }
}
