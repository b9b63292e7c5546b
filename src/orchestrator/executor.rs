//! Orchestrator execution logic

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;

use crate::config::RunConfig;
use crate::error::ProbeResult;
use crate::poller::StatusPoller;
use crate::report::RunReport;
use crate::tally::OutcomeTally;
use crate::target::TargetProbe;
use crate::workload;
use crate::worker::WorkerBuilder;

use super::aggregator::aggregate_worker_stats;

/// Orchestrator manages the probe run lifecycle
///
/// Responsible for filling the queue, spawning workers and the poller,
/// coordinating shutdown, and producing the final run report.
pub struct Orchestrator {
    /// Run configuration
    pub(crate) config: RunConfig,

    /// Target access (shared across workers and the poller)
    pub(crate) target: Arc<dyn TargetProbe>,

    /// Shared outcome counters, read for the report after all workers exit
    pub(crate) tally: Arc<OutcomeTally>,

    /// Shutdown signal sender
    pub(crate) shutdown_tx: broadcast::Sender<()>,
}

impl Orchestrator {
    /// Create a new orchestrator
    ///
    /// Use `OrchestratorBuilder` for a more ergonomic construction.
    pub fn new(config: RunConfig, target: Arc<dyn TargetProbe>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            target,
            tally: Arc::new(OutcomeTally::new()),
            shutdown_tx,
        }
    }

    /// Trigger shutdown of all workers and the poller
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }

    /// Get the run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the probe workload to completion
    ///
    /// Fills the queue, spawns the poller and worker pool, joins every worker
    /// (the queue closes at drain, and a worker only exits after recording the
    /// outcome of its last claimed item, so joining is the per-item completion
    /// acknowledgment), then cancels the poller and returns the report.
    pub async fn run(&self) -> ProbeResult<RunReport> {
        let start = Instant::now();

        tracing::info!(
            total_requests = self.config.total_requests,
            concurrency = self.config.concurrency,
            slow_ratio = self.config.slow_ratio,
            "starting run"
        );

        let items = workload::generate(self.config.total_requests, self.config.slow_ratio);
        let queue = workload::fill_queue(items);

        let poller = StatusPoller::new(Arc::clone(&self.target), self.config.poll_interval);
        let poller_handle = tokio::spawn(poller.run(self.shutdown_tx.subscribe()));

        let mut handles = Vec::with_capacity(self.config.concurrency);
        for worker_id in 0..self.config.concurrency {
            let worker = WorkerBuilder::new(worker_id)
                .target(Arc::clone(&self.target))
                .queue(Arc::clone(&queue))
                .tally(Arc::clone(&self.tally))
                .build()?;
            let shutdown_rx = self.shutdown_tx.subscribe();

            handles.push(tokio::spawn(async move { worker.run(shutdown_rx).await }));
        }

        // Wait for all workers to complete
        let mut results = Vec::with_capacity(handles.len());
        for (idx, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(stats) => {
                    tracing::debug!(
                        worker_id = idx,
                        completed = stats.completed,
                        errors = stats.errors,
                        "worker completed"
                    );
                    results.push(stats);
                }
                Err(e) => {
                    tracing::error!(worker_id = idx, error = %e, "worker task panicked");
                    // Continue collecting other results
                }
            }
        }

        // Cancel the poller: broadcast first, abort as a backstop for a
        // request hung past the broadcast check.
        let _ = self.shutdown_tx.send(());
        poller_handle.abort();
        let _ = poller_handle.await;

        let aggregated = aggregate_worker_stats(&results);
        let report = RunReport {
            rows: self.tally.snapshot(),
            completed: aggregated.total_completed,
            failed: aggregated.total_errors,
            elapsed: start.elapsed(),
        };

        tracing::info!(
            elapsed_secs = report.elapsed.as_secs_f64(),
            completed = report.completed,
            failed = report.failed,
            rps = aggregated.requests_per_second,
            "run finished"
        );

        Ok(report)
    }

    /// Run with Ctrl+C signal handling
    ///
    /// An interrupt triggers the same graceful shutdown path: workers and the
    /// poller stop at their next suspension point and the report still prints.
    pub async fn run_with_signal_handling(&self) -> ProbeResult<RunReport> {
        let shutdown_tx = self.shutdown_tx.clone();

        let signal_handle = tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("received Ctrl+C, initiating graceful shutdown...");
                    let _ = shutdown_tx.send(());
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to listen for Ctrl+C");
                }
            }
        });

        let result = self.run().await;

        // Abort signal handler if still running
        signal_handle.abort();

        result
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("config", &self.config)
            .finish()
    }
}
