//! Metrics Module
//!
//! Request counting for the static file server.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts hits on `/app/`
///
/// Owned by the service state; lock-free.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one hit, returning the new total
    pub fn record(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current number of hits
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Reset to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
