//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, Mark};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|m| *m != Mark::Empty)
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board) == Mark::Empty
}
