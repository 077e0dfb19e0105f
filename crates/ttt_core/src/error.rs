//! Error types for the board, search and session layers.

use derive_more::{Display, Error};

/// What went wrong in the board, rules or search layer.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Malformed construction (bad cell count, empty side, bad depth).
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// Cell index outside 0-8.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The move is not legal on the current board.
    #[display("Illegal move at {}", _0)]
    IllegalMove(usize),

    /// The board is in a state that does not allow the operation.
    #[display("Illegal state: {}", _0)]
    IllegalState(String),
}

/// Board, rules or search error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`GameErrorKind::InvalidArgument`] error.
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidArgument(message.into()))
    }

    /// Shorthand for an [`GameErrorKind::IllegalState`] error.
    #[track_caller]
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::IllegalState(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

/// What went wrong in the session, store or service layer.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// Unknown or malformed session identifier.
    #[display("Game not found: {}", _0)]
    NotFound(String),

    /// Session creation parameters are inconsistent.
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),

    /// The action does not fit the session's current state.
    #[display("Invalid operation: {}", _0)]
    InvalidOperation(String),

    /// A board-level failure surfaced through a session operation.
    #[display("{}", _0)]
    Game(GameErrorKind),

    /// The session store could not complete the request.
    #[display("Session store failure: {}", _0)]
    Store(String),
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// Error kind.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a [`SessionErrorKind::NotFound`] error.
    #[track_caller]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::NotFound(id.into()))
    }

    /// Shorthand for a [`SessionErrorKind::InvalidInput`] error.
    #[track_caller]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::InvalidInput(message.into()))
    }

    /// Shorthand for a [`SessionErrorKind::InvalidOperation`] error.
    #[track_caller]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::InvalidOperation(message.into()))
    }

    /// Shorthand for a [`SessionErrorKind::Store`] error.
    #[track_caller]
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Store(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &SessionErrorKind {
        &self.kind
    }
}

impl From<GameError> for SessionError {
    #[track_caller]
    fn from(err: GameError) -> Self {
        Self::new(SessionErrorKind::Game(err.kind))
    }
}
