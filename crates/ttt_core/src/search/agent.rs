//! Move-choosing agents and a simple match runner.

use super::minimax::Minimax;
use crate::error::GameError;
use crate::rules;
use crate::types::{Board, GameState, Mark, Move};
use tracing::{debug, info, instrument};

/// Anything that can pick a move for the side to move.
pub trait Agent {
    /// Chooses a legal move on `board`.
    ///
    /// # Errors
    ///
    /// `IllegalState` when the board has no legal moves.
    fn choose_move(&mut self, board: &Board) -> Result<Move, GameError>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;
}

impl Agent for Minimax {
    fn choose_move(&mut self, board: &Board) -> Result<Move, GameError> {
        Minimax::choose_move(self, board)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Agent that always picks the lowest free cell.
#[derive(Debug, Clone)]
pub struct FirstLegalAgent {
    name: String,
}

impl FirstLegalAgent {
    /// Creates a new first-legal agent.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for FirstLegalAgent {
    fn default() -> Self {
        Self::new("first-legal")
    }
}

impl Agent for FirstLegalAgent {
    fn choose_move(&mut self, board: &Board) -> Result<Move, GameError> {
        let index = board
            .legal_moves()
            .first()
            .copied()
            .ok_or_else(|| GameError::illegal_state("no legal moves"))?;
        debug!(agent = %self.name, position = index, "Agent chose position");
        Move::new(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays `start` to the end, `x` moving for X and `o` for O.
///
/// Returns the final state together with the moves played.
#[instrument(skip(x, o), fields(x = %x.name(), o = %o.name(), start = %start))]
pub fn play_match(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    start: Board,
) -> Result<(GameState, Vec<Move>), GameError> {
    let mut board = start;
    let mut moves = Vec::new();

    while !rules::is_terminal(&board) {
        let agent: &mut dyn Agent = match board.to_move() {
            Mark::X => &mut *x,
            _ => &mut *o,
        };
        let mv = agent.choose_move(&board)?;
        board = board.apply_move(mv)?;
        moves.push(mv);
    }

    let state = GameState::of(board);
    info!(outcome = ?state.outcome(), plies = moves.len(), "Match finished");
    Ok((state, moves))
}
