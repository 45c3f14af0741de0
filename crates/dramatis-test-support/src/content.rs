//! Content fixtures — a small, fully resolvable catalog for engine and API
//! tests.

use std::collections::HashMap;
use std::path::PathBuf;

use dramatis_content::{
    BackgroundIndex, Chapter, ContentCatalog, LocalizedLine, Project, RawCommand, RawProperty,
    TextTable,
};
use serde_json::json;

/// Builds a raw `cmdShowBackground` command for an entity id.
#[must_use]
pub fn show_background_command(entity_id: &str) -> RawCommand {
    RawCommand {
        name: "cmdShowBackground".to_owned(),
        properties: vec![RawProperty {
            name: "bgName".to_owned(),
            value: json!({ "entityID": entity_id }),
        }],
    }
}

/// Builds a raw `cmdText` command for a text id.
#[must_use]
pub fn text_command(text_id: &str) -> RawCommand {
    RawCommand {
        name: "cmdText".to_owned(),
        properties: vec![RawProperty {
            name: "text".to_owned(),
            value: json!(text_id),
        }],
    }
}

/// Builds a raw `cmdChoicesStart` marker.
#[must_use]
pub fn choices_start_command() -> RawCommand {
    RawCommand {
        name: "cmdChoicesStart".to_owned(),
        properties: vec![],
    }
}

/// Builds a raw command with an unrecognized tag.
#[must_use]
pub fn unknown_command(name: &str) -> RawCommand {
    RawCommand {
        name: name.to_owned(),
        properties: vec![],
    }
}

/// Wraps commands into a named chapter.
#[must_use]
pub fn chapter_of(name: &str, commands: Vec<RawCommand>) -> Chapter {
    Chapter {
        name: name.to_owned(),
        commands,
    }
}

/// A two-chapter catalog for the "Butler" fixture project.
///
/// `chp01` is the canonical playback scenario
/// `[ShowBackground(bg-hall), Text(chp01_0001), ShowBackground(bg-garden),
/// Text(chp01_0002)]`; `chp02` is a single text line. Both background ids
/// resolve, and every text id has a localized line.
#[must_use]
pub fn sample_catalog() -> ContentCatalog {
    let project: Project = serde_json::from_value(json!({
        "id": "butler",
        "title": "Butler",
        "chapters": [{ "name": "chp01" }, { "name": "chp02" }],
        "treeFolders": [
            { "name": "bg", "children": ["bg-hall", "bg-garden"] }
        ]
    }))
    .expect("fixture project manifest is well-formed");

    let chapters = HashMap::from([
        (
            "chp01".to_owned(),
            chapter_of(
                "chp01",
                vec![
                    show_background_command("bg-hall"),
                    text_command("chp01_0001"),
                    show_background_command("bg-garden"),
                    text_command("chp01_0002"),
                ],
            ),
        ),
        (
            "chp02".to_owned(),
            chapter_of("chp02", vec![text_command("chp02_0001")]),
        ),
    ]);

    let texts = TextTable::from_lines([
        (
            "chp01_0001".to_owned(),
            LocalizedLine {
                speaker: Some("Sebastian".to_owned()),
                text: "Dinner is served.".to_owned(),
            },
        ),
        (
            "chp01_0002".to_owned(),
            LocalizedLine {
                speaker: None,
                text: "The hall falls silent.".to_owned(),
            },
        ),
        (
            "chp02_0001".to_owned(),
            LocalizedLine {
                speaker: Some("Sebastian".to_owned()),
                text: "Welcome back.".to_owned(),
            },
        ),
    ]);

    let backgrounds = BackgroundIndex::from_parts(
        &["bg-hall".to_owned(), "bg-garden".to_owned()],
        vec![PathBuf::from("bg/001.png"), PathBuf::from("bg/002.png")],
    );

    ContentCatalog::new(project, chapters, texts, backgrounds)
}
