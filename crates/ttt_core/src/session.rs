//! Game sessions: one board per game plus the rules about who may move.

use crate::error::SessionError;
use crate::rules;
use crate::search::{Difficulty, Minimax};
use crate::types::{Board, GameOutcome, Mark, Move};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Opaque unique identifier for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for SessionId {
    type Err = SessionError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| SessionError::not_found(format!("invalid id {}", s)))
    }
}

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    #[serde(rename = "PVP")]
    HumanVsHuman,
    /// One side is played by the minimax engine.
    #[serde(rename = "PVE")]
    HumanVsComputer,
}

impl Mode {
    /// Mode tag used in the external projection.
    pub fn tag(self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "PVP",
            Mode::HumanVsComputer => "PVE",
        }
    }
}

/// A single game.
///
/// The board is replaced wholesale on every move; outcome and terminality
/// are always derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Session {
    /// Session ID.
    id: SessionId,
    /// Current position.
    board: Board,
    /// Who is playing.
    mode: Mode,
    /// Side the computer plays; present iff mode is `HumanVsComputer`.
    computer_side: Option<Mark>,
    /// Search preset for computer moves.
    difficulty: Difficulty,
    /// When the session was created.
    created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session on an empty board with X to move.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `computer_side` is missing in `HumanVsComputer`
    /// mode or present in `HumanVsHuman` mode. An `Empty` side counts as
    /// missing.
    #[instrument]
    pub fn create(
        mode: Mode,
        computer_side: Option<Mark>,
        difficulty: Difficulty,
    ) -> Result<Self, SessionError> {
        let computer_side = computer_side.filter(|m| m.is_side());
        match (mode, computer_side) {
            (Mode::HumanVsComputer, None) => {
                warn!("Computer side missing for PVE session");
                return Err(SessionError::invalid_input(
                    "computer side must be 'X' or 'O' for PVE",
                ));
            }
            (Mode::HumanVsHuman, Some(side)) => {
                warn!(%side, "Computer side given for PVP session");
                return Err(SessionError::invalid_input(
                    "computer side must be absent for PVP",
                ));
            }
            _ => {}
        }

        let session = Self {
            id: SessionId::generate(),
            board: Board::new(),
            mode,
            computer_side,
            difficulty,
            created_at: Utc::now(),
        };
        info!(session_id = %session.id, ?mode, ?computer_side, %difficulty, "Created new game session");
        Ok(session)
    }

    /// Derived outcome of the current board.
    pub fn outcome(&self) -> GameOutcome {
        rules::result(&self.board)
    }

    /// True once the game has concluded.
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    /// True when the computer plays and holds the turn.
    pub fn is_computer_turn(&self) -> bool {
        self.computer_side == Some(self.board.to_move())
    }

    /// Plays `index` for the side to move.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` when the game is over or the move is illegal.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        if !self.board.is_legal(index) {
            warn!(index, board = %self.board, "Illegal move rejected");
            return Err(SessionError::invalid_operation(format!(
                "illegal move: {}",
                index
            )));
        }

        self.board = self.board.apply(index)?;
        info!(
            index,
            board = %self.board,
            outcome = ?self.outcome(),
            "Human move applied"
        );
        Ok(())
    }

    /// Lets the engine play for the computer side.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` outside `HumanVsComputer` mode, when the game is
    /// over, or when the computer does not hold the turn.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn apply_computer_move(&mut self) -> Result<Move, SessionError> {
        if self.mode != Mode::HumanVsComputer {
            warn!("Computer move requested outside PVE");
            return Err(SessionError::invalid_operation(
                "computer moves are only allowed in PVE mode",
            ));
        }
        self.ensure_in_progress()?;
        let side = self
            .computer_side
            .ok_or_else(|| SessionError::invalid_operation("computer side not set"))?;
        if self.board.to_move() != side {
            warn!(
                expected = %side,
                to_move = %self.board.to_move(),
                "Computer tried to move out of turn"
            );
            return Err(SessionError::invalid_operation("not AI's turn"));
        }

        let mut engine = Minimax::with_difficulty(self.difficulty, side)?;
        let mv = engine.choose_move(&self.board)?;
        self.board = self.board.apply_move(mv)?;
        info!(
            position = mv.index(),
            board = %self.board,
            outcome = ?self.outcome(),
            "Computer move applied"
        );
        Ok(mv)
    }

    /// Move the hard engine would play for whichever side is to move.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` when the game is over.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn hint(&self) -> Result<Move, SessionError> {
        self.ensure_in_progress()?;
        let mut engine = Minimax::hard(self.board.to_move())?;
        let mv = engine.choose_move(&self.board)?;
        debug!(position = mv.index(), "Hint computed");
        Ok(mv)
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.is_terminal() {
            debug!(outcome = ?self.outcome(), "Move attempted on finished game");
            return Err(SessionError::invalid_operation("game over"));
        }
        Ok(())
    }
}
