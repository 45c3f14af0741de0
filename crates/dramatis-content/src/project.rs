//! Project manifest types.
//!
//! Field names mirror the authored on-disk JSON produced by the content
//! pipeline, hence the camelCase renames.

use serde::Deserialize;

/// A reference to a chapter within the project manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterRef {
    /// Chapter name; also the stem of its command file.
    pub name: String,
}

/// One folder in the project's asset tree.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetFolder {
    /// Folder name (e.g. `"bg"` for backgrounds).
    pub name: String,
    /// Ordered child asset entity ids.
    pub children: Vec<String>,
}

/// The project manifest: title, chapter list, and asset folder tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: String,
    /// Human-readable title, matched against viewer input during setup.
    pub title: String,
    /// Ordered chapters.
    pub chapters: Vec<ChapterRef>,
    /// Asset folder tree.
    #[serde(rename = "treeFolders")]
    pub tree_folders: Vec<AssetFolder>,
}

impl Project {
    /// Finds an asset folder by name.
    #[must_use]
    pub fn folder(&self, name: &str) -> Option<&AssetFolder> {
        self.tree_folders.iter().find(|f| f.name == name)
    }

    /// Ordered chapter names, for menus and selection validation.
    #[must_use]
    pub fn chapter_names(&self) -> Vec<String> {
        self.chapters.iter().map(|c| c.name.clone()).collect()
    }
}
