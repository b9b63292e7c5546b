//! Builder pattern for Worker construction

use crate::error::{ProbeError, ProbeResult};
use crate::tally::OutcomeTally;
use crate::target::TargetProbe;
use crate::workload::WorkQueue;

use super::executor::Worker;

use std::sync::Arc;

/// Builder for creating Worker instances
///
/// Provides ergonomic construction with validation.
///
/// # Example
/// ```ignore
/// let worker = WorkerBuilder::new(0)
///     .target(target)
///     .queue(queue)
///     .tally(tally)
///     .build()?;
/// ```
pub struct WorkerBuilder {
    id: usize,
    target: Option<Arc<dyn TargetProbe>>,
    queue: Option<WorkQueue>,
    tally: Option<Arc<OutcomeTally>>,
}

impl WorkerBuilder {
    /// Create a new builder with the given worker ID
    pub fn new(id: usize) -> Self {
        Self {
            id,
            target: None,
            queue: None,
            tally: None,
        }
    }

    /// Set the target probe
    pub fn target(mut self, target: Arc<dyn TargetProbe>) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the shared work queue
    pub fn queue(mut self, queue: WorkQueue) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Set the shared outcome tally
    pub fn tally(mut self, tally: Arc<OutcomeTally>) -> Self {
        self.tally = Some(tally);
        self
    }

    /// Build the Worker
    ///
    /// # Errors
    /// Returns an error if any required field is missing.
    pub fn build(self) -> ProbeResult<Worker> {
        let target = self.target.ok_or_else(|| ProbeError::missing_config("target"))?;
        let queue = self.queue.ok_or_else(|| ProbeError::missing_config("queue"))?;
        let tally = self.tally.ok_or_else(|| ProbeError::missing_config("tally"))?;

        Ok(Worker::new(self.id, target, queue, tally))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload;

    #[test]
    fn test_builder_missing_target() {
        let result = WorkerBuilder::new(0)
            .queue(workload::fill_queue(Vec::new()))
            .tally(Arc::new(OutcomeTally::new()))
            .build();

        assert!(matches!(result, Err(ProbeError::Config(msg)) if msg.contains("target")));
    }

    #[test]
    fn test_builder_missing_queue() {
        let result = WorkerBuilder::new(0)
            .tally(Arc::new(OutcomeTally::new()))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_missing_tally() {
        let result = WorkerBuilder::new(0)
            .queue(workload::fill_queue(Vec::new()))
            .build();

        assert!(result.is_err());
    }
}
