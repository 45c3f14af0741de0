//! The loaded content catalog.

use dramatis_core::error::EngineError;
use std::collections::HashMap;
use std::path::Path;

use crate::assets::BackgroundIndex;
use crate::chapter::Chapter;
use crate::loader;
use crate::project::Project;
use crate::text::TextTable;

/// Everything the engine needs about the active project, loaded once at
/// startup and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    project: Project,
    chapters: HashMap<String, Chapter>,
    texts: TextTable,
    backgrounds: BackgroundIndex,
}

impl ContentCatalog {
    /// Assembles a catalog from already-loaded parts.
    #[must_use]
    pub fn new(
        project: Project,
        chapters: HashMap<String, Chapter>,
        texts: TextTable,
        backgrounds: BackgroundIndex,
    ) -> Self {
        Self {
            project,
            chapters,
            texts,
            backgrounds,
        }
    }

    /// Loads a catalog from a content directory. See [`loader`] for the
    /// expected layout.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Infrastructure`] for filesystem failures and
    /// [`EngineError::ContentIntegrity`] for malformed content.
    pub fn load(root: &Path) -> Result<Self, EngineError> {
        loader::load_catalog(root)
    }

    /// The active project.
    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Looks up a chapter by name.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ContentIntegrity`] when no such chapter is
    /// loaded.
    pub fn chapter(&self, name: &str) -> Result<&Chapter, EngineError> {
        self.chapters
            .get(name)
            .ok_or_else(|| EngineError::ContentIntegrity(format!("no chapter named {name:?}")))
    }

    /// Whether a chapter with this name exists, for selection validation.
    #[must_use]
    pub fn has_chapter(&self, name: &str) -> bool {
        self.chapters.contains_key(name)
    }

    /// The localized text table.
    #[must_use]
    pub fn texts(&self) -> &TextTable {
        &self.texts
    }

    /// The background asset index.
    #[must_use]
    pub fn backgrounds(&self) -> &BackgroundIndex {
        &self.backgrounds
    }
}
