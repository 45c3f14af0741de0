//! The conversation state machine.
//!
//! Gates viewer input through the setup flow (language → project →
//! chapter) and invokes the interpreter once playback starts. Handlers
//! follow a load-execute-persist shape: setup transitions are saved before
//! their menus go out, and interpreter runs commit against a scratch clone
//! so a failed step never moves the persisted cursor.

use dramatis_content::ContentCatalog;
use dramatis_core::clock::Clock;
use dramatis_core::error::EngineError;
use dramatis_core::presentation::PresentationPort;
use dramatis_core::repository::SessionRepository;
use dramatis_core::session::{ConversationState, Session};
use dramatis_core::viewer::ViewerId;

use crate::config::PlayerConfig;
use crate::events::{AdvanceSignal, TextInput};
use crate::interpreter::{RunOutcome, run_from};

const SELECT_LANGUAGE_PROMPT: &str = "Select language";
const SELECT_PROJECT_PROMPT: &str = "Select game";
const SELECT_CHAPTER_PROMPT: &str = "Select chapter";
const CLARIFICATION: &str = "Can't understand";

/// Sends a menu without letting a transport failure roll back the
/// transition it follows. Menus are fire-and-forget notifications.
async fn offer_choices(port: &dyn PresentationPort, prompt: &str, options: &[String]) {
    if let Err(e) = port.present_choices(prompt, options).await {
        tracing::warn!(error = %e, prompt, "menu delivery failed");
    }
}

/// Sends a clarification notice; likewise fire-and-forget.
async fn send_notice(port: &dyn PresentationPort, text: &str) {
    if let Err(e) = port.send_notice(text).await {
        tracing::warn!(error = %e, "notice delivery failed");
    }
}

/// Runs the interpreter against a scratch clone of the session and
/// persists it only when the run succeeds.
async fn run_and_commit(
    viewer: &ViewerId,
    session: &Session,
    catalog: &ContentCatalog,
    config: &PlayerConfig,
    clock: &dyn Clock,
    sessions: &dyn SessionRepository,
    port: &dyn PresentationPort,
) -> Result<RunOutcome, EngineError> {
    let mut scratch = session.clone();
    let outcome = run_from(
        catalog,
        &mut scratch,
        port,
        &config.advance_label,
        clock.now(),
    )
    .await?;
    sessions.save(viewer, &scratch).await?;
    Ok(outcome)
}

/// Handles free text from a viewer.
///
/// First contact creates the session and presents the language menu. In
/// each setup state a matching input advances the flow and a mismatch gets
/// a clarification with no state mutation. Text during `Playing` and
/// `Idle` is ignored.
///
/// # Errors
///
/// Returns [`EngineError::Infrastructure`] when the session store fails,
/// and interpreter errors when chapter selection starts a run that fails
/// (the persisted session keeps its pre-run cursor).
pub async fn handle_text_input(
    event: &TextInput,
    catalog: &ContentCatalog,
    config: &PlayerConfig,
    clock: &dyn Clock,
    sessions: &dyn SessionRepository,
    port: &dyn PresentationPort,
) -> Result<(), EngineError> {
    let viewer = &event.viewer_id;
    let text = event.text.trim();

    let Some(mut session) = sessions.load(viewer).await? else {
        let session = Session::new(clock.now());
        sessions.save(viewer, &session).await?;
        tracing::info!(viewer = %viewer, "new viewer; starting setup");
        offer_choices(port, SELECT_LANGUAGE_PROMPT, &config.languages).await;
        return Ok(());
    };

    match session.state {
        ConversationState::AwaitingLanguage => {
            if !config.languages.iter().any(|l| l == text) {
                tracing::info!(viewer = %viewer, input = text, "language not recognized");
                send_notice(port, CLARIFICATION).await;
                return Ok(());
            }
            session.language = Some(text.to_owned());
            session.state = ConversationState::AwaitingProject;
            session.touch(clock.now());
            sessions.save(viewer, &session).await?;
            offer_choices(
                port,
                SELECT_PROJECT_PROMPT,
                &[catalog.project().title.clone()],
            )
            .await;
        }
        ConversationState::AwaitingProject => {
            if catalog.project().title != text {
                tracing::info!(viewer = %viewer, input = text, "project not recognized");
                send_notice(port, CLARIFICATION).await;
                return Ok(());
            }
            session.project_title = Some(text.to_owned());
            session.state = ConversationState::AwaitingChapter;
            session.touch(clock.now());
            sessions.save(viewer, &session).await?;
            offer_choices(
                port,
                SELECT_CHAPTER_PROMPT,
                &catalog.project().chapter_names(),
            )
            .await;
        }
        ConversationState::AwaitingChapter => {
            if !catalog.has_chapter(text) {
                tracing::info!(viewer = %viewer, input = text, "chapter not recognized");
                send_notice(port, CLARIFICATION).await;
                return Ok(());
            }
            session.begin_chapter(text, clock.now());
            sessions.save(viewer, &session).await?;
            tracing::info!(viewer = %viewer, chapter = text, "chapter selected; starting playback");
            run_and_commit(viewer, &session, catalog, config, clock, sessions, port).await?;
        }
        ConversationState::Playing | ConversationState::Idle => {
            // Free text carries no meaning here; only the advance signal
            // moves playback.
        }
    }

    Ok(())
}

/// Handles the dedicated advance action.
///
/// Runs the interpreter from the persisted cursor when the viewer is
/// playing; any other state (or an unknown viewer) is ignored and returns
/// `Ok(None)`.
///
/// # Errors
///
/// Returns interpreter errors ([`EngineError::ContentIntegrity`],
/// [`EngineError::Delivery`]) and [`EngineError::Infrastructure`] from the
/// session store. The persisted session is unchanged on error, so the next
/// advance replays the same step.
pub async fn handle_advance(
    event: &AdvanceSignal,
    catalog: &ContentCatalog,
    config: &PlayerConfig,
    clock: &dyn Clock,
    sessions: &dyn SessionRepository,
    port: &dyn PresentationPort,
) -> Result<Option<RunOutcome>, EngineError> {
    let viewer = &event.viewer_id;
    let Some(session) = sessions.load(viewer).await? else {
        return Ok(None);
    };
    if session.state != ConversationState::Playing {
        return Ok(None);
    }

    let outcome =
        run_and_commit(viewer, &session, catalog, config, clock, sessions, port).await?;
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    use dramatis_test_support::{
        FailingPresentation, FixedClock, InMemorySessionRepository, PresentationCall,
        RecordingPresentation, sample_catalog,
    };

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    fn viewer() -> ViewerId {
        ViewerId::from("viewer-1")
    }

    fn text_input(text: &str) -> TextInput {
        TextInput {
            viewer_id: viewer(),
            text: text.to_owned(),
        }
    }

    fn advance() -> AdvanceSignal {
        AdvanceSignal {
            viewer_id: viewer(),
        }
    }

    async fn handle(
        input: &TextInput,
        sessions: &InMemorySessionRepository,
        port: &RecordingPresentation,
    ) {
        let catalog = sample_catalog();
        handle_text_input(
            input,
            &catalog,
            &PlayerConfig::default(),
            &FixedClock(fixed_now()),
            sessions,
            port,
        )
        .await
        .unwrap();
    }

    /// Walks a fresh viewer through setup to the chapter menu.
    async fn complete_setup(sessions: &InMemorySessionRepository, port: &RecordingPresentation) {
        handle(&text_input("hello"), sessions, port).await;
        handle(&text_input("English"), sessions, port).await;
        handle(&text_input("Butler"), sessions, port).await;
    }

    #[tokio::test]
    async fn test_first_contact_creates_session_and_presents_languages() {
        // Arrange
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();

        // Act
        handle(&text_input("hello"), &sessions, &port).await;

        // Assert
        let stored = sessions.stored(&viewer()).unwrap();
        assert_eq!(stored.state, ConversationState::AwaitingLanguage);
        assert_eq!(
            port.calls(),
            vec![PresentationCall::Choices {
                prompt: "Select language".to_owned(),
                options: vec!["English".to_owned()],
            }]
        );
    }

    #[tokio::test]
    async fn test_unknown_language_gets_clarification_without_mutation() {
        // Arrange
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();
        handle(&text_input("hello"), &sessions, &port).await;
        let before = sessions.stored(&viewer()).unwrap();

        // Act
        handle(&text_input("French"), &sessions, &port).await;

        // Assert
        let after = sessions.stored(&viewer()).unwrap();
        assert_eq!(after, before);
        assert_eq!(
            port.calls().last(),
            Some(&PresentationCall::Notice {
                text: "Can't understand".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn test_language_selection_presents_project_menu() {
        // Arrange
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();
        handle(&text_input("hello"), &sessions, &port).await;

        // Act
        handle(&text_input("English"), &sessions, &port).await;

        // Assert
        let stored = sessions.stored(&viewer()).unwrap();
        assert_eq!(stored.state, ConversationState::AwaitingProject);
        assert_eq!(stored.language.as_deref(), Some("English"));
        assert_eq!(
            port.calls().last(),
            Some(&PresentationCall::Choices {
                prompt: "Select game".to_owned(),
                options: vec!["Butler".to_owned()],
            })
        );
    }

    #[tokio::test]
    async fn test_project_selection_presents_chapter_menu() {
        // Arrange
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();
        handle(&text_input("hello"), &sessions, &port).await;
        handle(&text_input("English"), &sessions, &port).await;

        // Act
        handle(&text_input("Butler"), &sessions, &port).await;

        // Assert
        let stored = sessions.stored(&viewer()).unwrap();
        assert_eq!(stored.state, ConversationState::AwaitingChapter);
        assert_eq!(stored.project_title.as_deref(), Some("Butler"));
        assert_eq!(
            port.calls().last(),
            Some(&PresentationCall::Choices {
                prompt: "Select chapter".to_owned(),
                options: vec!["chp01".to_owned(), "chp02".to_owned()],
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_chapter_gets_clarification_without_mutation() {
        // Arrange
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();
        complete_setup(&sessions, &port).await;
        let before = sessions.stored(&viewer()).unwrap();

        // Act
        handle(&text_input("chp99"), &sessions, &port).await;

        // Assert
        let after = sessions.stored(&viewer()).unwrap();
        assert_eq!(after, before);
        assert_eq!(after.state, ConversationState::AwaitingChapter);
        assert_eq!(
            port.calls().last(),
            Some(&PresentationCall::Notice {
                text: "Can't understand".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn test_chapter_selection_starts_playback_immediately() {
        // Arrange
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();
        complete_setup(&sessions, &port).await;

        // Act
        handle(&text_input("chp01"), &sessions, &port).await;

        // Assert — first step ran: background + first line, cursor at 2.
        let stored = sessions.stored(&viewer()).unwrap();
        assert_eq!(stored.state, ConversationState::Playing);
        assert_eq!(stored.chapter_name.as_deref(), Some("chp01"));
        assert_eq!(stored.command_cursor, 2);
        assert!(stored.background_message.is_some());
        assert!(stored.text_message.is_some());

        let calls = port.calls();
        assert!(matches!(
            calls[calls.len() - 2],
            PresentationCall::Background { existing: None, .. }
        ));
        assert!(matches!(
            calls[calls.len() - 1],
            PresentationCall::Text { existing: None, .. }
        ));
    }

    #[tokio::test]
    async fn test_free_text_is_ignored_while_playing() {
        // Arrange
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();
        complete_setup(&sessions, &port).await;
        handle(&text_input("chp01"), &sessions, &port).await;
        let before = sessions.stored(&viewer()).unwrap();
        let calls_before = port.calls().len();

        // Act
        handle(&text_input("skip to the end"), &sessions, &port).await;

        // Assert
        assert_eq!(sessions.stored(&viewer()).unwrap(), before);
        assert_eq!(port.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_advance_steps_through_to_chapter_end() {
        // Arrange
        let catalog = sample_catalog();
        let config = PlayerConfig::default();
        let clock = FixedClock(fixed_now());
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();
        complete_setup(&sessions, &port).await;
        handle(&text_input("chp01"), &sessions, &port).await;

        // Act
        let second = handle_advance(&advance(), &catalog, &config, &clock, &sessions, &port)
            .await
            .unwrap();
        let third = handle_advance(&advance(), &catalog, &config, &clock, &sessions, &port)
            .await
            .unwrap();

        // Assert — the second signal updates both units in place and lands
        // on cursor 4; the third finds the chapter exhausted.
        assert_eq!(second, Some(RunOutcome::AwaitingAdvance));
        assert_eq!(third, Some(RunOutcome::ChapterComplete));
        let stored = sessions.stored(&viewer()).unwrap();
        assert_eq!(stored.command_cursor, 4);

        let calls = port.calls();
        assert!(matches!(
            calls[calls.len() - 2],
            PresentationCall::Background {
                existing: Some(_),
                ..
            }
        ));
        assert!(matches!(
            calls[calls.len() - 1],
            PresentationCall::Text {
                existing: Some(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_advance_is_ignored_outside_playing() {
        // Arrange
        let catalog = sample_catalog();
        let config = PlayerConfig::default();
        let clock = FixedClock(fixed_now());
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();
        handle(&text_input("hello"), &sessions, &port).await;
        let calls_before = port.calls().len();

        // Act
        let outcome = handle_advance(&advance(), &catalog, &config, &clock, &sessions, &port)
            .await
            .unwrap();

        // Assert
        assert_eq!(outcome, None);
        assert_eq!(port.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_advance_for_unknown_viewer_is_a_no_op() {
        // Arrange
        let catalog = sample_catalog();
        let config = PlayerConfig::default();
        let clock = FixedClock(fixed_now());
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();

        // Act
        let outcome = handle_advance(&advance(), &catalog, &config, &clock, &sessions, &port)
            .await
            .unwrap();

        // Assert
        assert_eq!(outcome, None);
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_leaves_persisted_cursor_unchanged() {
        // Arrange — a playing session paused at cursor 2.
        let catalog = sample_catalog();
        let config = PlayerConfig::default();
        let clock = FixedClock(fixed_now());
        let sessions = InMemorySessionRepository::new();
        let setup_port = RecordingPresentation::new();
        complete_setup(&sessions, &setup_port).await;
        handle(&text_input("chp01"), &sessions, &setup_port).await;
        let before = sessions.stored(&viewer()).unwrap();

        // Act — the transport goes down for the next step.
        let result = handle_advance(
            &advance(),
            &catalog,
            &config,
            &clock,
            &sessions,
            &FailingPresentation,
        )
        .await;

        // Assert — error surfaced, session untouched, so the step replays.
        assert!(matches!(result.unwrap_err(), EngineError::Delivery(_)));
        assert_eq!(sessions.stored(&viewer()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_reselecting_flow_resets_cursor_and_refs_on_new_chapter() {
        // Arrange — a session that played chp01 to its end, then (via a
        // fresh record wipe, the only path back) reselects chp02.
        let catalog = sample_catalog();
        let config = PlayerConfig::default();
        let clock = FixedClock(fixed_now());
        let sessions = InMemorySessionRepository::new();
        let port = RecordingPresentation::new();
        complete_setup(&sessions, &port).await;
        handle(&text_input("chp01"), &sessions, &port).await;
        let mut mid_playback = sessions.stored(&viewer()).unwrap();
        assert!(mid_playback.command_cursor > 0);

        // Act
        mid_playback.state = ConversationState::AwaitingChapter;
        sessions.save(&viewer(), &mid_playback).await.unwrap();
        handle(&text_input("chp02"), &sessions, &port).await;

        // Assert — cursor reset and both refs cleared before the new run,
        // so the first step of chp02 is a fresh send.
        let stored = sessions.stored(&viewer()).unwrap();
        assert_eq!(stored.chapter_name.as_deref(), Some("chp02"));
        assert_eq!(stored.command_cursor, 1);
        assert!(matches!(
            port.calls().last(),
            Some(PresentationCall::Text { existing: None, .. })
        ));
    }
}
