//! Dramatis — immutable content model.
//!
//! Represents a pre-authored project: chapters of ordered commands, a
//! localized text table, and a background asset index. Everything here is
//! read-only after [`catalog::ContentCatalog::load`] and safely shared
//! across all viewers without locking.

pub mod assets;
pub mod catalog;
pub mod chapter;
pub mod loader;
pub mod project;
pub mod text;

pub use assets::BackgroundIndex;
pub use catalog::ContentCatalog;
pub use chapter::{Chapter, Command, RawCommand, RawProperty};
pub use project::{AssetFolder, ChapterRef, Project};
pub use text::{LocalizedLine, TextTable};
