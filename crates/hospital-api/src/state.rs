//! Shared state for the API router.

use hospital_core::{Database, SessionProvider};

use crate::error::ApiError;

/// Handed to every handler. Holds no mutable state; each request opens its
/// own database session.
#[derive(Debug, Clone)]
pub struct AppState {
    sessions: SessionProvider,
}

impl AppState {
    pub fn new(sessions: SessionProvider) -> Self {
        Self { sessions }
    }

    /// Open a session for one request. It is released when dropped.
    pub fn session(&self) -> Result<Database, ApiError> {
        Ok(self.sessions.acquire()?)
    }
}
