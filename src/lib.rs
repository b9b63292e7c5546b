//! lbprobe - visual load harness for a load balancer under test
//!
//! Drives a mixed workload of fast and slow HTTP requests against a target
//! load balancer, polls its `/stats` routing snapshot while the workload
//! runs, and prints a per-backend distribution report at the end of the run.
//!
//! # Architecture
//!
//! - **Workload**: typed work items (fast vs slow) pre-filled into a closed
//!   FIFO queue
//! - **Worker pool**: N tokio tasks draining the queue, one HTTP GET per item
//! - **Status poller**: independent periodic `/stats` sampler
//! - **Tally**: shared per-backend outcome counters, read once for the report
//! - **Orchestrator**: fills the queue, supervises workers and poller,
//!   coordinates shutdown, produces the report

pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod poller;
pub mod report;
pub mod tally;
pub mod target;
pub mod worker;
pub mod workload;

pub use config::RunConfig;
pub use error::{ProbeError, ProbeResult};
pub use orchestrator::{Orchestrator, OrchestratorBuilder};
pub use report::RunReport;
pub use tally::{BackendCounts, OutcomeTally};
pub use target::{HttpTarget, TargetProbe};
pub use workload::WorkItem;
pub use worker::{Worker, WorkerBuilder, WorkerStats};
