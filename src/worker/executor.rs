//! Worker execution loop

use crate::error::ProbeResult;
use crate::tally::OutcomeTally;
use crate::target::{backend_identity, TargetProbe};
use crate::workload::{WorkItem, WorkQueue};

use super::stats::WorkerStats;

use colored::Colorize;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Worker drains the shared queue: dequeue -> request -> tally -> repeat
///
/// Workers are tokio tasks supervised by the Orchestrator. They share the
/// target probe, the work queue, and the outcome tally via Arc handles, and
/// exit on their own once the queue is drained and closed.
pub struct Worker {
    /// Unique worker identifier
    id: usize,

    /// Target access (shared across workers and the poller via Arc)
    target: Arc<dyn TargetProbe>,

    /// Shared work queue handle
    queue: WorkQueue,

    /// Shared outcome counters
    tally: Arc<OutcomeTally>,
}

impl Worker {
    /// Create a new worker
    pub fn new(
        id: usize,
        target: Arc<dyn TargetProbe>,
        queue: WorkQueue,
        tally: Arc<OutcomeTally>,
    ) -> Self {
        Self {
            id,
            target,
            queue,
            tally,
        }
    }

    /// Run the worker loop
    ///
    /// Returns WorkerStats when complete (queue drained or shutdown signal).
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> WorkerStats {
        let mut stats = WorkerStats::new();
        stats.start();

        tracing::debug!(worker_id = self.id, "worker started");

        loop {
            let claimed = tokio::select! {
                biased;

                _ = shutdown.recv() => {
                    tracing::debug!(worker_id = self.id, "worker received shutdown signal");
                    None
                }

                claimed = Self::claim(&self.queue) => claimed,
            };

            let Some(item) = claimed else {
                break;
            };

            // The shutdown arm also guards the in-flight request, so a worker
            // stalled on a slow response still observes cancellation.
            tokio::select! {
                biased;

                _ = shutdown.recv() => {
                    tracing::debug!(worker_id = self.id, "worker cancelled mid-request");
                    break;
                }

                outcome = self.execute_one(item) => match outcome {
                    Ok(backend) => {
                        self.tally.record(&backend, item);
                        stats.record_success();

                        if item.is_slow() {
                            println!("{} -> {}", "SLOW (5s)".red(), backend);
                        } else {
                            println!("{}      -> {}", "FAST".green(), backend);
                        }
                    }
                    Err(e) => {
                        stats.record_error();
                        println!("{}: {}", "ERROR".yellow(), e);
                        tracing::warn!(worker_id = self.id, error = %e, "request failed");
                    }
                }
            }
        }

        stats.stop();
        tracing::debug!(
            worker_id = self.id,
            completed = stats.completed,
            errors = stats.errors,
            "worker finished"
        );

        stats
    }

    /// Claim the next item from the shared queue
    ///
    /// Resolves to `None` once the queue is drained; the channel is closed at
    /// fill time, so this never blocks an idle worker.
    async fn claim(queue: &WorkQueue) -> Option<WorkItem> {
        queue.lock().await.recv().await
    }

    /// Execute a single request and extract the responding backend identity
    async fn execute_one(&self, item: WorkItem) -> ProbeResult<String> {
        let body = self.target.fetch(item).await?;
        Ok(backend_identity(&body).to_string())
    }

    /// Get the worker ID
    pub fn id(&self) -> usize {
        self.id
    }
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker").field("id", &self.id).finish()
    }
}
