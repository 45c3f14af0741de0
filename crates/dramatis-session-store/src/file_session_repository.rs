//! JSON-file-backed session repository.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

use dramatis_core::error::EngineError;
use dramatis_core::repository::SessionRepository;
use dramatis_core::session::{SESSION_SCHEMA_VERSION, Session};
use dramatis_core::viewer::ViewerId;

/// Durable session store: a single JSON file holding the viewer-id →
/// session map.
///
/// Saves rewrite the whole map through a temp file and rename, so a crash
/// never leaves a half-written store. All file access goes through an
/// internal async mutex; per-viewer serialization across the whole event is
/// the caller's job (see [`crate::ViewerLocks`]).
#[derive(Debug)]
pub struct FileSessionRepository {
    path: PathBuf,
    io: Mutex<()>,
}

impl FileSessionRepository {
    /// Creates a repository backed by the given file. The file is created
    /// on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io: Mutex::new(()),
        }
    }

    async fn read_map(&self) -> Result<HashMap<String, Value>, EngineError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                EngineError::Infrastructure(format!("corrupt session store {:?}: {e}", self.path))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(EngineError::Infrastructure(format!(
                "reading session store {:?}: {e}",
                self.path
            ))),
        }
    }

    async fn write_map(&self, map: &HashMap<String, Value>) -> Result<(), EngineError> {
        let bytes = serde_json::to_vec_pretty(map)
            .map_err(|e| EngineError::Infrastructure(format!("encoding session store: {e}")))?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, bytes).await.map_err(|e| {
            EngineError::Infrastructure(format!("writing session store {tmp:?}: {e}"))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            EngineError::Infrastructure(format!("replacing session store {:?}: {e}", self.path))
        })
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn load(&self, viewer: &ViewerId) -> Result<Option<Session>, EngineError> {
        let _guard = self.io.lock().await;
        let map = self.read_map().await?;
        let Some(value) = map.get(viewer.as_str()) else {
            return Ok(None);
        };

        let session: Session = match serde_json::from_value(value.clone()) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(viewer = %viewer, error = %e, "discarding undeserializable session record");
                return Ok(None);
            }
        };

        if session.schema_version != SESSION_SCHEMA_VERSION {
            tracing::warn!(
                viewer = %viewer,
                found = session.schema_version,
                expected = SESSION_SCHEMA_VERSION,
                "discarding session record with incompatible schema version"
            );
            return Ok(None);
        }

        Ok(Some(session))
    }

    async fn save(&self, viewer: &ViewerId, session: &Session) -> Result<(), EngineError> {
        let _guard = self.io.lock().await;
        let mut map = self.read_map().await?;
        let value = serde_json::to_value(session)
            .map_err(|e| EngineError::Infrastructure(format!("encoding session: {e}")))?;
        map.insert(viewer.as_str().to_owned(), value);
        self.write_map(&map).await
    }
}
