//! Dramatis — session persistence infrastructure.
//!
//! Implements the core [`SessionRepository`] trait over a single JSON file
//! and provides the per-viewer locks that serialize event handling.
//!
//! [`SessionRepository`]: dramatis_core::repository::SessionRepository

pub mod file_session_repository;
pub mod viewer_locks;

pub use file_session_repository::FileSessionRepository;
pub use viewer_locks::ViewerLocks;
