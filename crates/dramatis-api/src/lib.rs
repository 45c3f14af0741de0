//! Dramatis API — HTTP surface over the playback engine.
//!
//! Exposes the two viewer events (free text and the advance signal) as
//! POST routes. Each request acquires the viewer's lock, runs the engine
//! against the shared catalog and session store, and returns the frame of
//! presentation units produced while handling the event.

pub mod error;
pub mod presentation;
pub mod routes;
pub mod state;
