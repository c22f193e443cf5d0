use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::models::SessionState;

/// In-memory session states keyed by session id.
///
/// Only sessions holding lists or a pending message are stored. A session
/// that returns to the empty state is dropped, so clients that never create
/// anything (or refuse cookies) cost no memory. Nothing is persisted;
/// restarting the server forgets every session.
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, SessionState>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Return the id to use for a request carrying `presented`.
    ///
    /// A stored id is reused. An absent or unknown id is replaced by a fresh
    /// one; the second element is `true` in that case so the caller can
    /// issue a cookie for it. Nothing is stored until a transition leaves
    /// state behind.
    pub fn resolve(&self, presented: Option<Uuid>) -> (Uuid, bool) {
        match presented {
            Some(id) if self.contains(id) => (id, false),
            _ => (Uuid::new_v4(), true),
        }
    }

    /// Run `f` against the state of session `id`, holding the lock for the
    /// whole call so requests within one session never interleave.
    ///
    /// An unknown session starts out empty and is stored only if `f` leaves
    /// something in it; a stored session left empty is removed.
    pub fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&mut SessionState) -> T) -> T {
        let mut sessions = self.sessions.lock().expect("session lock poisoned");

        match sessions.entry(id) {
            Entry::Occupied(mut entry) => {
                let out = f(entry.get_mut());
                if entry.get().is_empty() {
                    entry.remove();
                    tracing::debug!(session = %id, "Dropped empty session");
                }
                out
            }
            Entry::Vacant(entry) => {
                let mut state = SessionState::new();
                let out = f(&mut state);
                if !state.is_empty() {
                    entry.insert(state);
                    tracing::debug!(session = %id, "Stored session");
                }
                out
            }
        }
    }

    pub fn contains(&self, id: Uuid) -> bool {
        let sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        let sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SessionRegistry {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
        }
    }
}
