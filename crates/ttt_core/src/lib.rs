//! Tic-tac-toe core - board model, rules, minimax search and sessions.
//!
//! # Architecture
//!
//! - **Types**: immutable [`Board`], [`Mark`], validated [`Move`]
//! - **Rules**: outcome and terminality derived from a board
//! - **Search**: depth-limited minimax with alpha-beta pruning and a memo table
//! - **Session**: per-game state machine gating human and computer moves
//! - **Store / Service**: injected session storage and the operations a
//!   transport exposes
//!
//! # Example
//!
//! ```
//! use ttt_core::{GameService, Mark, Mode};
//!
//! # fn example() -> Result<(), ttt_core::SessionError> {
//! let service = GameService::in_memory();
//! let game = service.create_session(Mode::HumanVsComputer, Some(Mark::O))?;
//! let game = service.apply_human_move(&game.game_id, 4)?;
//! let game = service.apply_computer_move(&game.game_id)?;
//! assert_eq!(game.to_move, "X");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod rules;
pub mod search;
mod service;
mod session;
mod store;
mod types;
mod view;

pub use error::{GameError, GameErrorKind, SessionError, SessionErrorKind};
pub use search::{Agent, Difficulty, FirstLegalAgent, Minimax, SearchConfig, play_match};
pub use service::GameService;
pub use session::{Mode, Session, SessionId};
pub use store::{InMemorySessionStore, SessionStore};
pub use types::{Board, CELL_COUNT, CENTER, CORNERS, GameOutcome, GameState, Mark, Move};
pub use view::SessionView;
