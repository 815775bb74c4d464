//! Batch-level byte counters.
//!
//! A batch spans the time during which at least one transfer is active.
//! Counters only grow within a batch and are reset together when the
//! active set empties.

use dltrack_core::Progress;

/// Running byte counters for the current batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregateCounters {
    /// Declared sizes of transfers that completed in this batch.
    completed_bytes: u64,
    /// Declared sizes of every transfer registered in this batch.
    total_bytes: u64,
}

impl AggregateCounters {
    pub const fn new() -> Self {
        Self {
            completed_bytes: 0,
            total_bytes: 0,
        }
    }

    /// Account for a newly registered transfer.
    pub const fn add_expected(&mut self, bytes: u64) {
        self.total_bytes = self.total_bytes.saturating_add(bytes);
    }

    /// Account for a transfer that completed.
    pub const fn add_completed(&mut self, bytes: u64) {
        self.completed_bytes = self.completed_bytes.saturating_add(bytes);
    }

    pub const fn completed_bytes(&self) -> u64 {
        self.completed_bytes
    }

    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Bytes received across the batch, given the active transfers' sum.
    pub const fn received(&self, active_received: u64) -> u64 {
        self.completed_bytes.saturating_add(active_received)
    }

    /// Aggregate progress for the batch.
    pub fn progress(&self, active_received: u64) -> Progress {
        Progress::new(self.received(active_received), self.total_bytes)
    }

    /// Start a new batch.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}
