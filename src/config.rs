//! Run configuration types

use std::time::Duration;

/// Run configuration
///
/// Defines how a probe run is executed: where the target lives, how many
/// requests to send, how many workers drain the queue, what share of the
/// workload is slow, and how often the status poller ticks.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Base URL of the load balancer under test
    pub base_url: String,

    /// Total number of requests to enqueue
    pub total_requests: usize,

    /// Number of concurrent worker tasks
    pub concurrency: usize,

    /// Probability in [0, 1] that a generated request is slow
    pub slow_ratio: f64,

    /// Interval between status polls
    pub poll_interval: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3030".to_string(),
            total_requests: 100,
            concurrency: 20,
            slow_ratio: 0.3,
            poll_interval: Duration::from_millis(500),
        }
    }
}

impl RunConfig {
    /// Create a new config for the given target base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the total request count
    pub fn with_total_requests(mut self, total: usize) -> Self {
        self.total_requests = total;
        self
    }

    /// Set the worker count
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the slow-request ratio
    pub fn with_slow_ratio(mut self, ratio: f64) -> Self {
        self.slow_ratio = ratio;
        self
    }

    /// Set the status poll interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::InvalidBaseUrl("base URL is empty".into()));
        }

        if self.total_requests == 0 {
            return Err(ConfigError::InvalidRequestCount(
                "request count must be at least 1".into(),
            ));
        }

        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency(
                "concurrency must be at least 1".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.slow_ratio) {
            return Err(ConfigError::InvalidSlowRatio(format!(
                "slow ratio must be within [0, 1], got {}",
                self.slow_ratio
            )));
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::InvalidPollInterval(
                "poll interval must be positive".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid target base URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Invalid request count
    #[error("Invalid request count: {0}")]
    InvalidRequestCount(String),

    /// Invalid concurrency value
    #[error("Invalid concurrency: {0}")]
    InvalidConcurrency(String),

    /// Invalid slow-request ratio
    #[error("Invalid slow ratio: {0}")]
    InvalidSlowRatio(String),

    /// Invalid poll interval
    #[error("Invalid poll interval: {0}")]
    InvalidPollInterval(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.base_url, "http://localhost:3030");
        assert_eq!(config.total_requests, 100);
        assert_eq!(config.concurrency, 20);
        assert!((config.slow_ratio - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.poll_interval, Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = RunConfig::new("http://10.0.0.1:8080")
            .with_total_requests(10)
            .with_concurrency(5)
            .with_slow_ratio(0.0)
            .with_poll_interval(Duration::from_millis(100));

        assert_eq!(config.base_url, "http://10.0.0.1:8080");
        assert_eq!(config.total_requests, 10);
        assert_eq!(config.concurrency, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_concurrency() {
        let config = RunConfig {
            concurrency: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_requests() {
        let config = RunConfig {
            total_requests: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_ratio_out_of_range() {
        assert!(RunConfig::default().with_slow_ratio(1.5).validate().is_err());
        assert!(RunConfig::default()
            .with_slow_ratio(-0.1)
            .validate()
            .is_err());
        assert!(RunConfig::default().with_slow_ratio(1.0).validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_interval() {
        let config = RunConfig::default().with_poll_interval(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let config = RunConfig::new("");
        assert!(config.validate().is_err());
    }
}
