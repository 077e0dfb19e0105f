//! Game rules for tic-tac-toe.
//!
//! Pure functions deriving the outcome of a board. Nothing here is stored;
//! outcome and terminality are recomputed from the cells on every call.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, winner};

use crate::types::{Board, GameOutcome, Mark};

/// Derives the outcome of `board`.
pub fn result(board: &Board) -> GameOutcome {
    match winner(board) {
        Mark::X => GameOutcome::FirstWins,
        Mark::O => GameOutcome::SecondWins,
        Mark::Empty if is_full(board) => GameOutcome::Draw,
        Mark::Empty => GameOutcome::InProgress,
    }
}

/// True once the game has concluded (win or draw).
pub fn is_terminal(board: &Board) -> bool {
    result(board).is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> Board {
        moves
            .iter()
            .try_fold(Board::new(), |b, &i| b.apply(i))
            .unwrap()
    }

    #[test]
    fn test_row_win_detected() {
        let board = play(&[0, 3, 1, 4, 2]);
        assert_eq!(result(&board), GameOutcome::FirstWins);
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), Mark::X);
    }

    #[test]
    fn test_draw_detected() {
        let board = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(result(&board), GameOutcome::Draw);
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), Mark::Empty);
    }

    #[test]
    fn test_second_player_win() {
        let board = play(&[0, 4, 1, 2, 8, 6]);
        assert_eq!(result(&board), GameOutcome::SecondWins);
        assert_eq!(result(&board).winner_mark(), Mark::O);
    }

    #[test]
    fn test_in_progress() {
        let board = play(&[4, 0]);
        assert_eq!(result(&board), GameOutcome::InProgress);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_result_is_idempotent() {
        let board = play(&[0, 3, 1, 4]);
        assert_eq!(result(&board), result(&board));
    }
}
