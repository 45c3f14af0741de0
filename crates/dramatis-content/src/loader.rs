//! Filesystem loader for the content catalog.
//!
//! Expected layout under the content root:
//!
//! ```text
//! project.json          — project manifest
//! scripts/<name>.cmds   — one JSON command file per chapter in the manifest
//! texts.yaml            — text id → { speaker?, text }
//! bg/                   — background images, ordered by file name
//! ```

use dramatis_core::error::EngineError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::BackgroundIndex;
use crate::catalog::ContentCatalog;
use crate::chapter::Chapter;
use crate::project::Project;
use crate::text::TextTable;

fn io_error(context: &str, err: &std::io::Error) -> EngineError {
    EngineError::Infrastructure(format!("{context}: {err}"))
}

/// Loads the full catalog from a content directory.
///
/// # Errors
///
/// Returns [`EngineError::Infrastructure`] for filesystem failures and
/// [`EngineError::ContentIntegrity`] for malformed content.
pub fn load_catalog(root: &Path) -> Result<ContentCatalog, EngineError> {
    let project = load_project(&root.join("project.json"))?;
    let chapters = load_chapters(&root.join("scripts"), &project)?;
    let texts = load_text_table(&root.join("texts.yaml"))?;
    let backgrounds = load_backgrounds(&root.join("bg"), &project)?;

    tracing::info!(
        project = %project.title,
        chapters = chapters.len(),
        lines = texts.len(),
        backgrounds = backgrounds.len(),
        "content catalog loaded"
    );

    Ok(ContentCatalog::new(project, chapters, texts, backgrounds))
}

fn load_project(path: &Path) -> Result<Project, EngineError> {
    let bytes = fs::read(path).map_err(|e| io_error("reading project manifest", &e))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        EngineError::ContentIntegrity(format!("malformed project manifest {path:?}: {e}"))
    })
}

fn load_chapters(
    scripts_dir: &Path,
    project: &Project,
) -> Result<HashMap<String, Chapter>, EngineError> {
    let mut chapters = HashMap::with_capacity(project.chapters.len());
    for chapter_ref in &project.chapters {
        let path = scripts_dir.join(format!("{}.cmds", chapter_ref.name));
        let bytes = fs::read(&path).map_err(|e| io_error("reading chapter commands", &e))?;
        let mut chapter: Chapter = serde_json::from_slice(&bytes).map_err(|e| {
            EngineError::ContentIntegrity(format!("malformed chapter file {path:?}: {e}"))
        })?;
        chapter.name = chapter_ref.name.clone();
        chapters.insert(chapter_ref.name.clone(), chapter);
    }
    Ok(chapters)
}

fn load_text_table(path: &Path) -> Result<TextTable, EngineError> {
    let bytes = fs::read(path).map_err(|e| io_error("reading text table", &e))?;
    serde_yaml::from_slice(&bytes)
        .map_err(|e| EngineError::ContentIntegrity(format!("malformed text table {path:?}: {e}")))
}

fn load_backgrounds(bg_dir: &Path, project: &Project) -> Result<BackgroundIndex, EngineError> {
    let Some(folder) = project.folder("bg") else {
        tracing::warn!("project has no \"bg\" asset folder; backgrounds will not resolve");
        return Ok(BackgroundIndex::default());
    };

    let entries = fs::read_dir(bg_dir).map_err(|e| io_error("listing background directory", &e))?;
    let mut listing: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_error("listing background directory", &e))?;
        let path = entry.path();
        if path.is_file() {
            listing.push(path);
        }
    }
    // The authoring pipeline keeps folder children and files in lockstep;
    // sorting by file name makes our side of that ordering deterministic.
    listing.sort();

    Ok(BackgroundIndex::from_parts(&folder.children, listing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(root: &Path) {
        fs::write(
            root.join("project.json"),
            r#"{
                "id": "butler",
                "title": "Butler",
                "chapters": [{"name": "chp01"}],
                "treeFolders": [{"name": "bg", "children": ["bg-hall", "bg-garden"]}]
            }"#,
        )
        .unwrap();

        fs::create_dir(root.join("scripts")).unwrap();
        fs::write(
            root.join("scripts/chp01.cmds"),
            r#"{
                "commands": [
                    {"name": "cmdShowBackground", "properties": [{"name": "bgName", "value": {"entityID": "bg-hall"}}]},
                    {"name": "cmdText", "properties": [{"name": "text", "value": "chp01_0001"}]}
                ]
            }"#,
        )
        .unwrap();

        fs::write(
            root.join("texts.yaml"),
            "chp01_0001:\n  speaker: Sebastian\n  text: Dinner is served.\n",
        )
        .unwrap();

        fs::create_dir(root.join("bg")).unwrap();
        fs::write(root.join("bg/001.png"), b"png").unwrap();
        fs::write(root.join("bg/002.png"), b"png").unwrap();
    }

    #[test]
    fn test_load_catalog_builds_all_parts() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        // Act
        let catalog = load_catalog(dir.path()).unwrap();

        // Assert
        assert_eq!(catalog.project().title, "Butler");
        assert!(catalog.has_chapter("chp01"));
        assert_eq!(catalog.chapter("chp01").unwrap().commands.len(), 2);
        assert_eq!(
            catalog.texts().line("chp01_0001").unwrap().render(),
            "Sebastian\nDinner is served."
        );
        let asset = catalog.backgrounds().resolve("bg-garden").unwrap();
        assert!(asset.path.ends_with("002.png"));
    }

    #[test]
    fn test_load_catalog_missing_manifest_is_infrastructure_error() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();

        // Act
        let result = load_catalog(dir.path());

        // Assert
        assert!(matches!(
            result.unwrap_err(),
            EngineError::Infrastructure(_)
        ));
    }

    #[test]
    fn test_load_catalog_malformed_manifest_is_content_integrity_error() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("project.json"), "{not json").unwrap();

        // Act
        let result = load_catalog(dir.path());

        // Assert
        assert!(matches!(
            result.unwrap_err(),
            EngineError::ContentIntegrity(_)
        ));
    }
}
