//! Chapters and their commands.
//!
//! Commands are kept in their raw authored form and decoded lazily at
//! interpretation time, so a malformed command aborts only the run that
//! reaches it rather than failing the whole load.

use dramatis_core::error::EngineError;
use serde::Deserialize;
use serde_json::Value;

/// One name→value pair on a raw command.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProperty {
    /// Property name.
    pub name: String,
    /// Property value; shape depends on the command.
    pub value: Value,
}

/// One authored command as it appears in a chapter's command file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCommand {
    /// Command tag (e.g. `cmdShowBackground`).
    pub name: String,
    /// Property list.
    #[serde(default)]
    pub properties: Vec<RawProperty>,
}

impl RawCommand {
    /// Looks up a property value by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    fn require_property(&self, name: &str) -> Result<&Value, EngineError> {
        self.property(name).ok_or_else(|| {
            EngineError::ContentIntegrity(format!(
                "command {} is missing required property {name:?}",
                self.name
            ))
        })
    }
}

/// A named, ordered sequence of commands: one playable unit of content.
#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    /// Chapter name.
    #[serde(default)]
    pub name: String,
    /// Ordered commands.
    pub commands: Vec<RawCommand>,
}

/// A decoded command variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Display a background image resolved from a symbolic entity id.
    ShowBackground {
        /// Entity id within the `"bg"` asset folder.
        entity_id: String,
    },
    /// Display a localized text line and pause for the advance signal.
    Text {
        /// Key into the localized text table.
        text_id: String,
    },
    /// Boundary marker for a choice block. Branch execution is not
    /// implemented; the interpreter treats this as a no-op.
    ChoicesStart,
    /// An unrecognized command tag, retained so the skip policy is applied
    /// in one place.
    Unknown {
        /// The unrecognized tag.
        name: String,
    },
}

impl Command {
    /// Decodes a raw command into its typed variant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ContentIntegrity`] when a recognized command
    /// is missing a required property or carries one of the wrong shape.
    pub fn decode(raw: &RawCommand) -> Result<Self, EngineError> {
        match raw.name.as_str() {
            "cmdShowBackground" => {
                let value = raw.require_property("bgName")?;
                let entity_id = value
                    .get("entityID")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        EngineError::ContentIntegrity(format!(
                            "cmdShowBackground property bgName has no string entityID: {value}"
                        ))
                    })?;
                Ok(Self::ShowBackground {
                    entity_id: entity_id.to_owned(),
                })
            }
            "cmdText" => {
                let value = raw.require_property("text")?;
                let text_id = value.as_str().ok_or_else(|| {
                    EngineError::ContentIntegrity(format!(
                        "cmdText property text is not a string: {value}"
                    ))
                })?;
                Ok(Self::Text {
                    text_id: text_id.to_owned(),
                })
            }
            "cmdChoicesStart" => Ok(Self::ChoicesStart),
            other => Ok(Self::Unknown {
                name: other.to_owned(),
            }),
        }
    }
}
