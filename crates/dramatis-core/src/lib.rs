//! Dramatis Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the content,
//! engine, and infrastructure crates depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod error;
pub mod presentation;
pub mod repository;
pub mod session;
pub mod viewer;
