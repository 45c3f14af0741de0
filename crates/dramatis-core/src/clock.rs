//! Time source abstraction.
//!
//! Session records carry an `updated_at` timestamp; routing every read of
//! the wall clock through [`Clock`] lets the engine and the tests pin time
//! to a fixed instant.

use chrono::{DateTime, Utc};

/// Source of the timestamps stamped onto session records.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock, used outside of tests.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
