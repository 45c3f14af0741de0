//! Engine error types.

use thiserror::Error;

/// Top-level error type for the narrative player.
///
/// No variant is process-fatal; every error is scoped to a single viewer's
/// single event.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Required authored data is missing or malformed (unresolvable asset
    /// id, missing command property, missing localized line).
    #[error("content integrity error: {0}")]
    ContentIntegrity(String),

    /// A presentation call failed in transit. The session is left unchanged
    /// so the step can be replayed on the next advance signal.
    #[error("delivery error: {0}")]
    Delivery(String),

    /// An unrecognized command tag was encountered. The interpreter
    /// currently skips unknown tags with a warning instead of raising this;
    /// the variant stands for deployments that want strict scripts.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The unrecognized command tag.
        name: String,
    },

    /// Viewer input did not match any expected option during setup. The
    /// state machine currently answers mismatches with a clarification
    /// notice instead of raising this; the variant stands for callers that
    /// want the mismatch surfaced as an error.
    #[error("input mismatch: {0}")]
    InputMismatch(String),

    /// A storage or filesystem error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
