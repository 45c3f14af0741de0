//! Routes for the two viewer events.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use dramatis_core::viewer::ViewerId;
use dramatis_engine::{AdvanceSignal, RunOutcome, TextInput, handle_advance, handle_text_input};

use crate::error::ApiError;
use crate::presentation::{FrameSink, FrameUnit};
use crate::state::AppState;

/// Request body for POST /text.
#[derive(Debug, Deserialize)]
pub struct TextInputRequest {
    /// The viewer sending the text.
    pub viewer_id: ViewerId,
    /// The text as typed.
    pub text: String,
}

/// Request body for POST /advance.
#[derive(Debug, Deserialize)]
pub struct AdvanceRequest {
    /// The viewer advancing playback.
    pub viewer_id: ViewerId,
}

/// Response body: the presentation units produced while handling the
/// event, plus how the run ended for advance signals.
#[derive(Debug, Serialize)]
pub struct FrameResponse {
    /// `awaiting_advance`, `chapter_complete`, or `ignored`; absent for
    /// text events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'static str>,
    /// Ordered presentation units.
    pub units: Vec<FrameUnit>,
}

fn outcome_label(outcome: Option<RunOutcome>) -> &'static str {
    match outcome {
        Some(RunOutcome::AwaitingAdvance) => "awaiting_advance",
        Some(RunOutcome::ChapterComplete) => "chapter_complete",
        None => "ignored",
    }
}

/// POST /text
#[instrument(skip(state, request), fields(viewer_id = %request.viewer_id))]
async fn text_input(
    State(state): State<AppState>,
    Json(request): Json<TextInputRequest>,
) -> Result<Json<FrameResponse>, ApiError> {
    let event = TextInput {
        viewer_id: request.viewer_id,
        text: request.text,
    };

    info!("handling text input");

    let _guard = state.locks.acquire(&event.viewer_id).await;
    let sink = FrameSink::new();
    handle_text_input(
        &event,
        &state.catalog,
        &state.config,
        state.clock.as_ref(),
        state.sessions.as_ref(),
        &sink,
    )
    .await?;

    Ok(Json(FrameResponse {
        outcome: None,
        units: sink.into_units(),
    }))
}

/// POST /advance
#[instrument(skip(state, request), fields(viewer_id = %request.viewer_id))]
async fn advance(
    State(state): State<AppState>,
    Json(request): Json<AdvanceRequest>,
) -> Result<Json<FrameResponse>, ApiError> {
    let event = AdvanceSignal {
        viewer_id: request.viewer_id,
    };

    info!("handling advance signal");

    let _guard = state.locks.acquire(&event.viewer_id).await;
    let sink = FrameSink::new();
    let outcome = handle_advance(
        &event,
        &state.catalog,
        &state.config,
        state.clock.as_ref(),
        state.sessions.as_ref(),
        &sink,
    )
    .await?;

    Ok(Json(FrameResponse {
        outcome: Some(outcome_label(outcome)),
        units: sink.into_units(),
    }))
}

/// Returns the router for viewer events.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/text", post(text_input))
        .route("/advance", post(advance))
}
