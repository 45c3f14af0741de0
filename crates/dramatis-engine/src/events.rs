//! Viewer-facing events — the only input shapes the engine recognizes.

use dramatis_core::viewer::ViewerId;

/// Free text typed by the viewer; meaningful only during setup states.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The viewer this event belongs to.
    pub viewer_id: ViewerId,
    /// The text as typed.
    pub text: String,
}

/// The dedicated advance action resuming playback from the persisted
/// cursor.
#[derive(Debug, Clone)]
pub struct AdvanceSignal {
    /// The viewer this event belongs to.
    pub viewer_id: ViewerId,
}
