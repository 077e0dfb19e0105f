//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark};
use tracing::instrument;

/// The eight winning lines, scanned in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark owning the first complete line, or `Empty`.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Mark {
    let cells = board.cells();
    for [a, b, c] in WINNING_LINES {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return mark;
        }
    }
    Mark::Empty
}
