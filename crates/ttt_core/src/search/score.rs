//! Terminal and heuristic scoring, always from the engine side's perspective.

use crate::error::GameError;
use crate::rules::WINNING_LINES;
use crate::types::{Board, CENTER, CORNERS, GameOutcome, Mark};

/// Score of a won game.
pub const WIN_SCORE: i32 = 1000;
/// Score of a lost game.
pub const LOSS_SCORE: i32 = -1000;
/// Score of a drawn game.
pub const DRAW_SCORE: i32 = 0;

/// Two of ours (or theirs) in a line with the third cell open.
pub const TWO_IN_ROW_OPEN: i32 = 10;
/// Holding the center.
pub const CENTER_WEIGHT: i32 = 3;
/// Holding a corner, per corner.
pub const CORNER_WEIGHT: i32 = 2;

/// Scores a finished game for `ai_mark`.
///
/// # Errors
///
/// `InvalidArgument` if `outcome` is `InProgress`.
#[track_caller]
pub fn terminal_score(outcome: GameOutcome, ai_mark: Mark) -> Result<i32, GameError> {
    match outcome {
        GameOutcome::InProgress => Err(GameError::invalid_argument("not terminal")),
        GameOutcome::Draw => Ok(DRAW_SCORE),
        won => Ok(if won.winner_mark() == ai_mark {
            WIN_SCORE
        } else {
            LOSS_SCORE
        }),
    }
}

/// Additive positional estimate used when the depth limit cuts the search.
pub fn heuristic(board: &Board, ai_mark: Mark) -> i32 {
    let cells = board.cells();
    let opponent = ai_mark.opponent();
    let mut score = 0;

    for line in WINNING_LINES {
        let (mut ours, mut theirs, mut open) = (0, 0, 0);
        for i in line {
            match cells[i] {
                Mark::Empty => open += 1,
                m if m == ai_mark => ours += 1,
                _ => theirs += 1,
            }
        }
        if ours == 2 && open == 1 {
            score += TWO_IN_ROW_OPEN;
        }
        if theirs == 2 && open == 1 {
            score -= TWO_IN_ROW_OPEN;
        }
    }

    score += weight(cells[CENTER], ai_mark, opponent, CENTER_WEIGHT);
    for corner in CORNERS {
        score += weight(cells[corner], ai_mark, opponent, CORNER_WEIGHT);
    }

    score
}

fn weight(cell: Mark, ai_mark: Mark, opponent: Mark, value: i32) -> i32 {
    if cell == ai_mark {
        value
    } else if cell == opponent {
        -value
    } else {
        0
    }
}
