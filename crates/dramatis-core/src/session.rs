//! The per-viewer session record.
//!
//! The session is the resumable checkpoint of a viewer's progress: which
//! setup selections they have made, where the command cursor stands in the
//! active chapter, and which presentation units are currently on screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current session schema version. Persisted records carrying a different
/// version are discarded and the viewer restarts setup.
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Opaque handle to a previously shown presentation unit, enabling an
/// in-place update instead of a fresh send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageRef(pub Uuid);

impl MessageRef {
    /// Mints a fresh handle for a newly created presentation unit.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Coarse top-level conversation state gating which viewer inputs are
/// meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Waiting for the viewer to pick a language.
    AwaitingLanguage,
    /// Waiting for the viewer to pick a project.
    AwaitingProject,
    /// Waiting for the viewer to pick a chapter.
    AwaitingChapter,
    /// Chapter playback in progress; only the advance signal is meaningful.
    Playing,
    /// Inactive; all input is ignored.
    Idle,
}

/// Mutable per-viewer record, written only under the viewer's own turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Schema version of this record.
    pub schema_version: u32,
    /// Current conversation state.
    pub state: ConversationState,
    /// Language selected during setup.
    pub language: Option<String>,
    /// Project title selected during setup.
    pub project_title: Option<String>,
    /// Chapter name selected during setup.
    pub chapter_name: Option<String>,
    /// Index of the next command to execute in the active chapter.
    /// Invariant: `0 <= command_cursor <= commands.len()`.
    pub command_cursor: usize,
    /// Handle to the last-sent background unit, if any.
    pub background_message: Option<MessageRef>,
    /// Handle to the last-sent text unit, if any.
    pub text_message: Option<MessageRef>,
    /// Timestamp of the last mutation.
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session for a viewer on first contact.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            schema_version: SESSION_SCHEMA_VERSION,
            state: ConversationState::AwaitingLanguage,
            language: None,
            project_title: None,
            chapter_name: None,
            command_cursor: 0,
            background_message: None,
            text_message: None,
            updated_at: now,
        }
    }

    /// Starts playback of a chapter: resets the cursor to 0 and clears both
    /// message refs. This is the only operation that does either.
    pub fn begin_chapter(&mut self, name: impl Into<String>, now: DateTime<Utc>) {
        self.chapter_name = Some(name.into());
        self.command_cursor = 0;
        self.background_message = None;
        self.text_message = None;
        self.state = ConversationState::Playing;
        self.updated_at = now;
    }

    /// Records a mutation timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
