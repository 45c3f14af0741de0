//! API route modules.

pub mod health;
pub mod viewer;
