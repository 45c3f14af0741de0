//! Frame-collecting presentation adapter.
//!
//! The HTTP surface has no push channel, so each request collects the
//! presentation units the engine produces and returns them in the response
//! body. A unit that reuses an existing message ref is an in-place update
//! of a unit the client already renders; a unit with a fresh ref is a new
//! slot.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;

use dramatis_core::error::EngineError;
use dramatis_core::presentation::{AssetHandle, PresentationPort};
use dramatis_core::session::MessageRef;

/// One presentation unit in a response frame.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameUnit {
    /// A background image slot.
    Background {
        /// Handle of the slot; stable across updates.
        message_ref: MessageRef,
        /// True when this replaces a slot the client already renders.
        updated: bool,
        /// Path of the image resource.
        asset: String,
    },
    /// A text slot with an advance affordance.
    Text {
        /// Handle of the slot; stable across updates.
        message_ref: MessageRef,
        /// True when this replaces a slot the client already renders.
        updated: bool,
        /// Rendered line.
        text: String,
        /// Label for the advance control.
        advance_label: String,
    },
    /// A choice menu.
    Choices {
        /// Prompt above the menu.
        prompt: String,
        /// Ordered option labels.
        options: Vec<String>,
    },
    /// A plain notice.
    Notice {
        /// Notice text.
        text: String,
    },
}

/// A `PresentationPort` that records units for the duration of one request.
#[derive(Debug, Default)]
pub struct FrameSink {
    units: Mutex<Vec<FrameUnit>>,
}

impl FrameSink {
    /// Creates an empty sink for one request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the sink, yielding the collected units in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn into_units(self) -> Vec<FrameUnit> {
        self.units.into_inner().unwrap()
    }
}

#[async_trait]
impl PresentationPort for FrameSink {
    async fn show_or_update_background(
        &self,
        existing: Option<MessageRef>,
        asset: &AssetHandle,
    ) -> Result<MessageRef, EngineError> {
        let message_ref = existing.unwrap_or_else(MessageRef::generate);
        self.units.lock().unwrap().push(FrameUnit::Background {
            message_ref,
            updated: existing.is_some(),
            asset: asset.path.display().to_string(),
        });
        Ok(message_ref)
    }

    async fn show_or_update_text(
        &self,
        existing: Option<MessageRef>,
        text: &str,
        advance_label: &str,
    ) -> Result<MessageRef, EngineError> {
        let message_ref = existing.unwrap_or_else(MessageRef::generate);
        self.units.lock().unwrap().push(FrameUnit::Text {
            message_ref,
            updated: existing.is_some(),
            text: text.to_owned(),
            advance_label: advance_label.to_owned(),
        });
        Ok(message_ref)
    }

    async fn present_choices(&self, prompt: &str, options: &[String]) -> Result<(), EngineError> {
        self.units.lock().unwrap().push(FrameUnit::Choices {
            prompt: prompt.to_owned(),
            options: options.to_vec(),
        });
        Ok(())
    }

    async fn send_notice(&self, text: &str) -> Result<(), EngineError> {
        self.units.lock().unwrap().push(FrameUnit::Notice {
            text: text.to_owned(),
        });
        Ok(())
    }
}
