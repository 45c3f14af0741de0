//! Shared test mocks and fixtures for the Dramatis narrative player.

mod clock;
mod content;
mod presentation;
mod repository;

pub use clock::FixedClock;
pub use content::{
    chapter_of, choices_start_command, sample_catalog, show_background_command, text_command,
    unknown_command,
};
pub use presentation::{FailingPresentation, PresentationCall, RecordingPresentation};
pub use repository::{FailingSessionRepository, InMemorySessionRepository};
