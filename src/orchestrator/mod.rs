//! Orchestrator for run lifecycle management
//!
//! The Orchestrator coordinates a complete probe run:
//! - Generating the workload and filling the queue
//! - Spawning the worker pool and the status poller
//! - Joining workers for per-item completion acknowledgment
//! - Cancelling the poller via the shutdown broadcast
//! - Aggregating worker stats into the final run report
//!
//! # Example
//!
//! ```ignore
//! use lbprobe::orchestrator::OrchestratorBuilder;
//!
//! let orchestrator = OrchestratorBuilder::new()
//!     .config(config)
//!     .target(target)
//!     .build()?;
//!
//! let report = orchestrator.run_with_signal_handling().await?;
//! print!("{}", report.render());
//! ```

mod aggregator;
mod builder;
mod executor;

pub use aggregator::{aggregate_worker_stats, AggregatedStats};
pub use builder::OrchestratorBuilder;
pub use executor::Orchestrator;
