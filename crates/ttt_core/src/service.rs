//! Session service: the operations a transport exposes.

use crate::error::SessionError;
use crate::search::Difficulty;
use crate::session::{Mode, Session, SessionId};
use crate::store::{InMemorySessionStore, SessionStore};
use crate::types::{Mark, Move};
use crate::view::SessionView;
use std::str::FromStr;
use tracing::{info, instrument};

/// Creates, reads and advances sessions held in a [`SessionStore`].
///
/// Every move runs inside [`SessionStore::update`], so two requests racing
/// on the same session cannot both apply a move to the same board.
#[derive(Debug, Clone)]
pub struct GameService<S> {
    store: S,
}

impl GameService<InMemorySessionStore> {
    /// Service over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemorySessionStore::new())
    }
}

impl<S: SessionStore> GameService<S> {
    /// Creates a service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Starts a game; computer moves use the hard preset.
    pub fn create_session(
        &self,
        mode: Mode,
        computer_side: Option<Mark>,
    ) -> Result<SessionView, SessionError> {
        self.create_session_with(mode, computer_side, Difficulty::Hard)
    }

    /// Starts a game with an explicit difficulty for computer moves.
    #[instrument(skip(self))]
    pub fn create_session_with(
        &self,
        mode: Mode,
        computer_side: Option<Mark>,
        difficulty: Difficulty,
    ) -> Result<SessionView, SessionError> {
        let session = Session::create(mode, computer_side, difficulty)?;
        let view = SessionView::from(&session);
        self.store.put(session)?;
        info!(session_id = %view.game_id, "Session registered");
        Ok(view)
    }

    /// Reads a session.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Result<SessionView, SessionError> {
        let session = self.fetch(id)?;
        Ok(SessionView::from(&session))
    }

    /// Plays `index` for the side to move.
    #[instrument(skip(self))]
    pub fn apply_human_move(&self, id: &str, index: usize) -> Result<SessionView, SessionError> {
        let id = SessionId::from_str(id)?;
        self.store.update(&id, |session| {
            session.apply_human_move(index)?;
            Ok(SessionView::from(&*session))
        })
    }

    /// Lets the engine play for the computer side.
    #[instrument(skip(self))]
    pub fn apply_computer_move(&self, id: &str) -> Result<SessionView, SessionError> {
        let id = SessionId::from_str(id)?;
        self.store.update(&id, |session| {
            session.apply_computer_move()?;
            Ok(SessionView::from(&*session))
        })
    }

    /// Best move for the side to move; the session is not modified.
    #[instrument(skip(self))]
    pub fn hint(&self, id: &str) -> Result<Move, SessionError> {
        self.fetch(id)?.hint()
    }

    fn fetch(&self, id: &str) -> Result<Session, SessionError> {
        let parsed = SessionId::from_str(id)?;
        self.store
            .get(&parsed)?
            .ok_or_else(|| SessionError::not_found(id))
    }
}
