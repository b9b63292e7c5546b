//! Builder pattern for Orchestrator construction

use std::sync::Arc;
use std::time::Duration;

use crate::config::RunConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::target::TargetProbe;

use super::executor::Orchestrator;

/// Builder for creating an Orchestrator with validated configuration
///
/// # Example
///
/// ```ignore
/// let orchestrator = OrchestratorBuilder::new()
///     .total_requests(100)
///     .concurrency(20)
///     .slow_ratio(0.3)
///     .target(target)
///     .build()?;
/// ```
pub struct OrchestratorBuilder {
    config: RunConfig,
    target: Option<Arc<dyn TargetProbe>>,
}

impl OrchestratorBuilder {
    /// Create a new orchestrator builder with default configuration
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
            target: None,
        }
    }

    /// Set the full run configuration
    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the total request count
    pub fn total_requests(mut self, total: usize) -> Self {
        self.config.total_requests = total;
        self
    }

    /// Set the worker count
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Set the slow-request ratio
    pub fn slow_ratio(mut self, ratio: f64) -> Self {
        self.config.slow_ratio = ratio;
        self
    }

    /// Set the status poll interval
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Set the target probe
    pub fn target(mut self, target: Arc<dyn TargetProbe>) -> Self {
        self.target = Some(target);
        self
    }

    /// Build the orchestrator
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not set or if configuration
    /// validation fails.
    pub fn build(self) -> ProbeResult<Orchestrator> {
        let target = self
            .target
            .ok_or_else(|| ProbeError::missing_config("target"))?;

        self.config
            .validate()
            .map_err(|e| ProbeError::Config(e.to_string()))?;

        Ok(Orchestrator::new(self.config, target))
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
