//! Session repository abstraction.

use async_trait::async_trait;

use crate::error::EngineError;
use crate::session::Session;
use crate::viewer::ViewerId;

/// Repository trait for loading and saving per-viewer sessions.
///
/// Implementations are durable; serialized access per viewer is enforced by
/// the caller (the API layer holds a per-viewer lock across each event).
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Load the session for a viewer, or `None` if the viewer has no usable
    /// record (never seen, or persisted under an incompatible schema).
    async fn load(&self, viewer: &ViewerId) -> Result<Option<Session>, EngineError>;

    /// Persist the session for a viewer, replacing any previous record.
    async fn save(&self, viewer: &ViewerId, session: &Session) -> Result<(), EngineError>;
}
