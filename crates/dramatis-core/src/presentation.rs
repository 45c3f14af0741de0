//! Presentation port — the capability the engine uses to reach the viewer.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::EngineError;
use crate::session::MessageRef;

/// A concrete displayable asset resolved from a symbolic entity id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetHandle {
    /// The symbolic entity id this asset was resolved from.
    pub entity_id: String,
    /// Path to the image resource.
    pub path: PathBuf,
}

/// Abstract display surface consumed by the interpreter and the
/// conversation state machine.
///
/// `show_or_update_*` are idempotent given the same `existing` ref and
/// content: re-displaying identical content in place is a no-op from the
/// viewer's perspective. Failures are [`EngineError::Delivery`] and leave
/// the session unchanged so the step replays on the next advance signal.
///
/// `present_choices` and `send_notice` are fire-and-forget notifications;
/// they are not part of the state machine's control flow.
#[async_trait]
pub trait PresentationPort: Send + Sync {
    /// Display a background image, in place when `existing` is given.
    /// Returns the handle of the displayed unit.
    async fn show_or_update_background(
        &self,
        existing: Option<MessageRef>,
        asset: &AssetHandle,
    ) -> Result<MessageRef, EngineError>;

    /// Display a rendered text line with an advance affordance, in place
    /// when `existing` is given. Returns the handle of the displayed unit.
    async fn show_or_update_text(
        &self,
        existing: Option<MessageRef>,
        text: &str,
        advance_label: &str,
    ) -> Result<MessageRef, EngineError>;

    /// Present an ordered menu of options to the viewer.
    async fn present_choices(&self, prompt: &str, options: &[String]) -> Result<(), EngineError>;

    /// Send a plain notice (clarification prompts and the like).
    async fn send_notice(&self, text: &str) -> Result<(), EngineError>;
}
