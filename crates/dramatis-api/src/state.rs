//! Shared application state.

use std::sync::Arc;

use dramatis_content::ContentCatalog;
use dramatis_core::clock::Clock;
use dramatis_core::repository::SessionRepository;
use dramatis_engine::PlayerConfig;
use dramatis_session_store::ViewerLocks;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded content catalog, immutable and shared by all viewers.
    pub catalog: Arc<ContentCatalog>,
    /// Conversation-flow configuration.
    pub config: Arc<PlayerConfig>,
    /// Clock used for session timestamps.
    pub clock: Arc<dyn Clock>,
    /// Durable session store.
    pub sessions: Arc<dyn SessionRepository>,
    /// Per-viewer locks serializing event handling.
    pub locks: Arc<ViewerLocks>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        catalog: Arc<ContentCatalog>,
        config: Arc<PlayerConfig>,
        clock: Arc<dyn Clock>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            catalog,
            config,
            clock,
            sessions,
            locks: Arc::new(ViewerLocks::new()),
        }
    }
}
