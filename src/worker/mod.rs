//! Worker module for driving workload requests
//!
//! The Worker is the core execution unit of the harness, responsible for the
//! simple but critical loop: **dequeue -> request -> tally -> repeat**.
//!
//! Each Worker is a tokio task that:
//!
//! 1. Claims the next WorkItem from the shared queue
//! 2. Issues one HTTP GET against the target via a TargetProbe
//! 3. Extracts the responding backend's identity from the body
//! 4. Increments the shared OutcomeTally for (identity, kind)
//! 5. Repeats until the queue drains or shutdown is signalled
//!
//! # Example
//!
//! ```ignore
//! use lbprobe::worker::WorkerBuilder;
//!
//! let worker = WorkerBuilder::new(0)
//!     .target(target)
//!     .queue(queue)
//!     .tally(tally)
//!     .build()?;
//!
//! let stats = worker.run(shutdown_rx).await;
//! println!("Completed: {}", stats.completed);
//! ```

mod builder;
mod executor;
mod stats;

pub use builder::WorkerBuilder;
pub use executor::Worker;
pub use stats::WorkerStats;
