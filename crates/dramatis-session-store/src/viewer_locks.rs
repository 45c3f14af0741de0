//! Per-viewer mutual exclusion.
//!
//! Events for a single viewer must be processed in arrival order, and the
//! session read-modify-write for that viewer must be serialized — nothing
//! else in the design provides that implicitly.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use dramatis_core::viewer::ViewerId;

/// A map of per-viewer async locks. Different viewers' events proceed
/// concurrently; a single viewer's events queue up on their lock.
#[derive(Debug, Default)]
pub struct ViewerLocks {
    locks: Mutex<HashMap<ViewerId, Arc<AsyncMutex<()>>>>,
}

impl ViewerLocks {
    /// Creates an empty lock map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for a viewer, holding it for the guard's lifetime.
    ///
    /// # Panics
    ///
    /// Panics if the internal map mutex is poisoned.
    pub async fn acquire(&self, viewer: &ViewerId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap();
            Arc::clone(locks.entry(viewer.clone()).or_default())
        };
        lock.lock_owned().await
    }
}
