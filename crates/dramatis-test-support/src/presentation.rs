//! Test presentation ports — recording and failing `PresentationPort`
//! implementations.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use dramatis_core::error::EngineError;
use dramatis_core::presentation::{AssetHandle, PresentationPort};
use dramatis_core::session::MessageRef;

/// One recorded presentation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationCall {
    /// A background display-or-update.
    Background {
        /// The ref passed in, if any (an in-place update when present).
        existing: Option<MessageRef>,
        /// Path of the displayed asset.
        path: PathBuf,
        /// The ref handed back to the engine.
        returned: MessageRef,
    },
    /// A text display-or-update.
    Text {
        /// The ref passed in, if any (an in-place update when present).
        existing: Option<MessageRef>,
        /// The rendered text.
        text: String,
        /// The advance-control label offered to the viewer.
        advance_label: String,
        /// The ref handed back to the engine.
        returned: MessageRef,
    },
    /// A choice menu presentation.
    Choices {
        /// The prompt above the menu.
        prompt: String,
        /// Ordered option labels.
        options: Vec<String>,
    },
    /// A plain notice.
    Notice {
        /// The notice text.
        text: String,
    },
}

/// A presentation port that records every call and succeeds. Updates reuse
/// the existing ref; fresh sends mint a new one, as a real transport would.
#[derive(Debug, Default)]
pub struct RecordingPresentation {
    calls: Mutex<Vec<PresentationCall>>,
}

impl RecordingPresentation {
    /// Creates an empty recording port.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded calls in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<PresentationCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PresentationPort for RecordingPresentation {
    async fn show_or_update_background(
        &self,
        existing: Option<MessageRef>,
        asset: &AssetHandle,
    ) -> Result<MessageRef, EngineError> {
        let returned = existing.unwrap_or_else(MessageRef::generate);
        self.calls.lock().unwrap().push(PresentationCall::Background {
            existing,
            path: asset.path.clone(),
            returned,
        });
        Ok(returned)
    }

    async fn show_or_update_text(
        &self,
        existing: Option<MessageRef>,
        text: &str,
        advance_label: &str,
    ) -> Result<MessageRef, EngineError> {
        let returned = existing.unwrap_or_else(MessageRef::generate);
        self.calls.lock().unwrap().push(PresentationCall::Text {
            existing,
            text: text.to_owned(),
            advance_label: advance_label.to_owned(),
            returned,
        });
        Ok(returned)
    }

    async fn present_choices(&self, prompt: &str, options: &[String]) -> Result<(), EngineError> {
        self.calls.lock().unwrap().push(PresentationCall::Choices {
            prompt: prompt.to_owned(),
            options: options.to_vec(),
        });
        Ok(())
    }

    async fn send_notice(&self, text: &str) -> Result<(), EngineError> {
        self.calls.lock().unwrap().push(PresentationCall::Notice {
            text: text.to_owned(),
        });
        Ok(())
    }
}

/// A presentation port whose every call fails with a delivery error. Useful
/// for testing replay-safety paths.
#[derive(Debug)]
pub struct FailingPresentation;

#[async_trait]
impl PresentationPort for FailingPresentation {
    async fn show_or_update_background(
        &self,
        _existing: Option<MessageRef>,
        _asset: &AssetHandle,
    ) -> Result<MessageRef, EngineError> {
        Err(EngineError::Delivery("transport unreachable".into()))
    }

    async fn show_or_update_text(
        &self,
        _existing: Option<MessageRef>,
        _text: &str,
        _advance_label: &str,
    ) -> Result<MessageRef, EngineError> {
        Err(EngineError::Delivery("transport unreachable".into()))
    }

    async fn present_choices(
        &self,
        _prompt: &str,
        _options: &[String],
    ) -> Result<(), EngineError> {
        Err(EngineError::Delivery("transport unreachable".into()))
    }

    async fn send_notice(&self, _text: &str) -> Result<(), EngineError> {
        Err(EngineError::Delivery("transport unreachable".into()))
    }
}
