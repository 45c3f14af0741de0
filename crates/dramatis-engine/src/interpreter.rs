//! The command interpreter.
//!
//! Executes the active chapter's commands from the session's cursor,
//! applying side effects through the presentation port. Background changes
//! run through without stopping; every text line is a suspension point —
//! the cursor is advanced past it and control returns until the next
//! advance signal.

use chrono::{DateTime, Utc};

use dramatis_content::{Command, ContentCatalog};
use dramatis_core::error::EngineError;
use dramatis_core::presentation::PresentationPort;
use dramatis_core::session::Session;

/// How an interpreter run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A text line was displayed; playback is paused until the viewer
    /// advances.
    AwaitingAdvance,
    /// The cursor reached the end of the command list. Further advance
    /// signals are no-ops.
    ChapterComplete,
}

/// Runs commands from `session.command_cursor` forward.
///
/// Mutates the session's cursor and message refs as it goes; callers that
/// need error atomicity run this against a scratch clone and persist it
/// only on `Ok` (see [`crate::conversation`]).
///
/// # Errors
///
/// Returns [`EngineError::ContentIntegrity`] when a command references
/// missing data and [`EngineError::Delivery`] when a display call fails.
/// Either aborts the run; the persisted session stays on the same step.
pub async fn run_from(
    catalog: &ContentCatalog,
    session: &mut Session,
    port: &dyn PresentationPort,
    advance_label: &str,
    now: DateTime<Utc>,
) -> Result<RunOutcome, EngineError> {
    let chapter_name = session.chapter_name.as_deref().ok_or_else(|| {
        EngineError::ContentIntegrity("session is playing with no chapter selected".to_owned())
    })?;
    let chapter = catalog.chapter(chapter_name)?;
    let commands = &chapter.commands;

    let mut index = session.command_cursor;
    while let Some(raw) = commands.get(index) {
        match Command::decode(raw)? {
            Command::ShowBackground { entity_id } => {
                let asset = catalog.backgrounds().resolve(&entity_id)?;
                let message = port
                    .show_or_update_background(session.background_message, asset)
                    .await?;
                session.background_message = Some(message);
            }
            Command::Text { text_id } => {
                let line = catalog.texts().line(&text_id)?;
                let message = port
                    .show_or_update_text(session.text_message, &line.render(), advance_label)
                    .await?;
                session.text_message = Some(message);
                session.command_cursor = index + 1;
                session.touch(now);
                return Ok(RunOutcome::AwaitingAdvance);
            }
            Command::ChoicesStart => {
                // Branch execution is unimplemented; the marker is a no-op
                // boundary.
            }
            Command::Unknown { name } => {
                tracing::warn!(command = %name, index, "skipping unrecognized command");
            }
        }
        index += 1;
    }

    session.command_cursor = commands.len();
    session.touch(now);
    Ok(RunOutcome::ChapterComplete)
}
