//! Background asset resolution.
//!
//! The content pipeline keeps the `"bg"` folder's ordered children and the
//! background directory listing in lockstep: the id at position `k` names
//! the file at position `k`. Rather than repeating that positional join on
//! every lookup, the index zips the two collections once at load into an
//! explicit id → asset map, so an id past the end of the listing simply has
//! no entry and resolution fails instead of picking a wrong file.

use dramatis_core::error::EngineError;
use dramatis_core::presentation::AssetHandle;
use std::collections::HashMap;
use std::path::PathBuf;

/// Id → asset map for background images.
#[derive(Debug, Clone, Default)]
pub struct BackgroundIndex {
    assets: HashMap<String, AssetHandle>,
}

impl BackgroundIndex {
    /// Builds the index from the `"bg"` folder's ordered child ids and the
    /// matching ordered file listing.
    #[must_use]
    pub fn from_parts(children: &[String], listing: Vec<PathBuf>) -> Self {
        if children.len() > listing.len() {
            tracing::warn!(
                ids = children.len(),
                files = listing.len(),
                "background folder lists more ids than files; trailing ids will not resolve"
            );
        }
        let assets = children
            .iter()
            .zip(listing)
            .map(|(entity_id, path)| {
                (
                    entity_id.clone(),
                    AssetHandle {
                        entity_id: entity_id.clone(),
                        path,
                    },
                )
            })
            .collect();
        Self { assets }
    }

    /// Resolves a background entity id to its asset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ContentIntegrity`] when the id has no mapped
    /// asset — either absent from the folder's children or positioned past
    /// the end of the directory listing.
    pub fn resolve(&self, entity_id: &str) -> Result<&AssetHandle, EngineError> {
        self.assets.get(entity_id).ok_or_else(|| {
            EngineError::ContentIntegrity(format!(
                "no background asset resolves for entity id {entity_id:?}"
            ))
        })
    }

    /// Number of resolvable backgrounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
