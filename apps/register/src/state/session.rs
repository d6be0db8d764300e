//! # Session State
//!
//! Holds the register's one [`Session`] behind a mutex so every command
//! borrows it for exactly the duration of one core call.

use std::sync::{Arc, Mutex, PoisonError};

use till_core::Session;

/// Shared handle to the register's session.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>` so a handle can be cloned into another
/// front end without copying the state.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Wraps an existing session.
    pub fn new(session: Session) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let balance = state.with_session(|s| s.till().read());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        // Core operations never leave the session half-written, so a
        // poisoned lock still guards consistent state.
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_session_mut(|s| s.inventory().restock("Hat", 10))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

impl Default for SessionState {
    /// A freshly seeded register.
    fn default() -> Self {
        Self::new(Session::seeded())
    }
}
