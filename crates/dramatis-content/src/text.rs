//! Localized text table.

use dramatis_core::error::EngineError;
use serde::Deserialize;
use std::collections::HashMap;

/// One localized line: an optional speaker and the body text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedLine {
    /// Speaker name, absent for narration.
    #[serde(default)]
    pub speaker: Option<String>,
    /// Body text.
    pub text: String,
}

impl LocalizedLine {
    /// Renders the line for display: `speaker` on its own line above the
    /// body when present, the body alone otherwise.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.speaker {
            Some(speaker) => format!("{speaker}\n{}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Flat mapping of text id → localized line. Keys are globally unique
/// across all chapters of a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TextTable {
    lines: HashMap<String, LocalizedLine>,
}

impl TextTable {
    /// Builds a table from an iterator of (id, line) pairs.
    pub fn from_lines(lines: impl IntoIterator<Item = (String, LocalizedLine)>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    /// Looks up a line by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ContentIntegrity`] when the id is absent.
    pub fn line(&self, text_id: &str) -> Result<&LocalizedLine, EngineError> {
        self.lines.get(text_id).ok_or_else(|| {
            EngineError::ContentIntegrity(format!("no localized line for text id {text_id:?}"))
        })
    }

    /// Number of lines in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
