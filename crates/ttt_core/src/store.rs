//! Session storage.
//!
//! The service only needs atomic get / put / remove and an update that runs
//! fetch, validate, compute and store as one step per session. Anything
//! offering that can back the service; [`InMemorySessionStore`] is the
//! process-local implementation.

use crate::error::SessionError;
use crate::session::{Session, SessionId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, instrument};

/// Key-value storage for sessions.
pub trait SessionStore: Send + Sync {
    /// Returns a snapshot of the session.
    fn get(&self, id: &SessionId) -> Result<Option<Session>, SessionError>;

    /// Inserts or replaces a session.
    fn put(&self, session: Session) -> Result<(), SessionError>;

    /// Removes a session, returning it if it existed.
    fn remove(&self, id: &SessionId) -> Result<Option<Session>, SessionError>;

    /// Runs `f` against the stored session as a single atomic step.
    ///
    /// `f` works on a copy that is written back only when it succeeds, so a
    /// failed update leaves the stored session untouched.
    ///
    /// # Errors
    ///
    /// `NotFound` when no session has this id, or whatever `f` returns.
    fn update<T, F>(&self, id: &SessionId, f: F) -> Result<T, SessionError>
    where
        F: FnOnce(&mut Session) -> Result<T, SessionError>;

    /// Lists stored session ids.
    fn ids(&self) -> Result<Vec<SessionId>, SessionError>;

    /// Number of stored sessions.
    fn len(&self) -> Result<usize, SessionError> {
        Ok(self.ids()?.len())
    }

    /// True when nothing is stored.
    fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.len()? == 0)
    }
}

/// Shared handle to one stored session.
type SessionSlot = Arc<Mutex<Session>>;

/// Process-local store.
///
/// The map lock is held only to look up or insert a slot; each session has
/// its own lock, so a long update on one session does not stall the others.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, SessionSlot>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating in-memory session store");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, SessionSlot>>, SessionError> {
        self.sessions
            .lock()
            .map_err(|e| SessionError::store(format!("session map poisoned: {}", e)))
    }

    fn slot(&self, id: &SessionId) -> Result<Option<SessionSlot>, SessionError> {
        Ok(self.lock()?.get(id).cloned())
    }
}

fn lock_slot(slot: &SessionSlot) -> Result<MutexGuard<'_, Session>, SessionError> {
    slot.lock()
        .map_err(|e| SessionError::store(format!("session poisoned: {}", e)))
}

impl SessionStore for InMemorySessionStore {
    #[instrument(skip(self), fields(session_id = %id))]
    fn get(&self, id: &SessionId) -> Result<Option<Session>, SessionError> {
        let Some(slot) = self.slot(id)? else {
            debug!("Session not found");
            return Ok(None);
        };
        let session = lock_slot(&slot)?.clone();
        Ok(Some(session))
    }

    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    fn put(&self, session: Session) -> Result<(), SessionError> {
        let id = *session.id();
        self.lock()?.insert(id, Arc::new(Mutex::new(session)));
        debug!("Session stored");
        Ok(())
    }

    #[instrument(skip(self), fields(session_id = %id))]
    fn remove(&self, id: &SessionId) -> Result<Option<Session>, SessionError> {
        let slot = self.lock()?.remove(id);
        let removed = match slot {
            Some(slot) => {
                let session = lock_slot(&slot)?.clone();
                Some(session)
            }
            None => None,
        };
        debug!(removed = removed.is_some(), "Session removed");
        Ok(removed)
    }

    #[instrument(skip(self, f), fields(session_id = %id))]
    fn update<T, F>(&self, id: &SessionId, f: F) -> Result<T, SessionError>
    where
        F: FnOnce(&mut Session) -> Result<T, SessionError>,
    {
        let slot = self
            .slot(id)?
            .ok_or_else(|| SessionError::not_found(id.to_string()))?;
        let mut stored = lock_slot(&slot)?;

        let mut draft = stored.clone();
        let value = f(&mut draft)?;
        *stored = draft;
        debug!("Session updated");
        Ok(value)
    }

    fn ids(&self) -> Result<Vec<SessionId>, SessionError> {
        Ok(self.lock()?.keys().copied().collect())
    }
}
