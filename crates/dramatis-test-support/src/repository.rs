//! Test repositories — mock `SessionRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use dramatis_core::error::EngineError;
use dramatis_core::repository::SessionRepository;
use dramatis_core::session::Session;
use dramatis_core::viewer::ViewerId;

/// A session repository backed by an in-memory map. Suitable both as a test
/// double and as the store behind API integration tests.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<ViewerId, Session>>,
}

impl InMemorySessionRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with a single viewer's session.
    #[must_use]
    pub fn with_session(viewer: ViewerId, session: Session) -> Self {
        let repo = Self::new();
        repo.sessions.lock().unwrap().insert(viewer, session);
        repo
    }

    /// Returns a snapshot of the stored session for a viewer.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn stored(&self, viewer: &ViewerId) -> Option<Session> {
        self.sessions.lock().unwrap().get(viewer).cloned()
    }

    /// Number of distinct viewers with a stored session.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Whether no sessions are stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn load(&self, viewer: &ViewerId) -> Result<Option<Session>, EngineError> {
        Ok(self.sessions.lock().unwrap().get(viewer).cloned())
    }

    async fn save(&self, viewer: &ViewerId, session: &Session) -> Result<(), EngineError> {
        self.sessions
            .lock()
            .unwrap()
            .insert(viewer.clone(), session.clone());
        Ok(())
    }
}

/// A session repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingSessionRepository;

#[async_trait]
impl SessionRepository for FailingSessionRepository {
    async fn load(&self, _viewer: &ViewerId) -> Result<Option<Session>, EngineError> {
        Err(EngineError::Infrastructure("store unavailable".into()))
    }

    async fn save(&self, _viewer: &ViewerId, _session: &Session) -> Result<(), EngineError> {
        Err(EngineError::Infrastructure("store unavailable".into()))
    }
}
