use std::sync::atomic::{AtomicUsize, Ordering};

/// Running count of labels scored, shared by concurrently running chunk calls.
///
/// Only ever incremented and logged; nothing branches on it.
#[derive(Debug)]
pub struct ProgressCounter {
    scored: AtomicUsize,
    total: usize,
}

impl ProgressCounter {
    pub fn new(total: usize) -> Self {
        Self {
            scored: AtomicUsize::new(0),
            total,
        }
    }

    /// Adds `count` and returns the new running total.
    pub fn record(&self, count: usize) -> usize {
        // Relaxed: the value is only reported, never used to order other memory.
        self.scored.fetch_add(count, Ordering::Relaxed) + count
    }

    pub fn scored(&self) -> usize {
        self.scored.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
