//! Shared outcome counters keyed by backend identity
//!
//! The tally is the only mutable state shared across workers. It is owned by
//! the orchestrator and injected into each worker as an `Arc` handle; one
//! increment is a single mutex-guarded read-modify-write, and the mutex is
//! never held across an await point.

use crate::workload::WorkItem;

use std::collections::HashMap;
use std::sync::Mutex;

/// Fast/slow counts for one backend
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BackendCounts {
    /// Successful fast requests served by this backend
    pub fast: u64,
    /// Successful slow requests served by this backend
    pub slow: u64,
}

impl BackendCounts {
    /// Total successful requests served by this backend
    pub fn total(&self) -> u64 {
        self.fast + self.slow
    }
}

/// Concurrent per-backend outcome counters
#[derive(Debug, Default)]
pub struct OutcomeTally {
    counts: Mutex<HashMap<String, BackendCounts>>,
}

impl OutcomeTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful outcome for `(backend, kind)`
    ///
    /// A backend seen for the first time starts from explicit zero counts.
    pub fn record(&self, backend: &str, item: WorkItem) {
        let mut counts = self.counts.lock().expect("tally mutex poisoned");
        let entry = counts.entry(backend.to_string()).or_default();
        if item.is_slow() {
            entry.slow += 1;
        } else {
            entry.fast += 1;
        }
    }

    /// Stable snapshot of all counters, sorted by backend identity
    ///
    /// Only meaningful once all workers have terminated; the run report is
    /// the single consumer.
    pub fn snapshot(&self) -> Vec<(String, BackendCounts)> {
        let counts = self.counts.lock().expect("tally mutex poisoned");
        let mut rows: Vec<_> = counts
            .iter()
            .map(|(backend, counts)| (backend.clone(), *counts))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }

    /// Sum of all recorded outcomes across backends
    pub fn total(&self) -> u64 {
        let counts = self.counts.lock().expect("tally mutex poisoned");
        counts.values().map(BackendCounts::total).sum()
    }
}
