//! Periodic status poller
//!
//! Samples the target's `/stats` routing snapshot on a fixed interval while
//! the workload runs, independent of workload completion. A failed poll
//! prints a distinct error line and never stops the next tick.

use crate::target::{BackendStatus, TargetProbe};

use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{self, Interval, MissedTickBehavior};

/// Independent task polling the target's routing state
pub struct StatusPoller {
    target: Arc<dyn TargetProbe>,
    interval: Duration,
}

impl StatusPoller {
    /// Create a poller ticking at the given interval
    pub fn new(target: Arc<dyn TargetProbe>, interval: Duration) -> Self {
        Self { target, interval }
    }

    /// Run until shutdown is signalled
    ///
    /// The shutdown arm wraps the whole tick, so cancellation is observed
    /// mid-sleep and mid-request alike.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(interval = ?self.interval, "status poller started");

        loop {
            tokio::select! {
                biased;

                _ = shutdown.recv() => break,

                _ = Self::tick(&self.target, &mut ticker) => {}
            }
        }

        tracing::debug!("status poller stopped");
    }

    async fn tick(target: &Arc<dyn TargetProbe>, ticker: &mut Interval) {
        ticker.tick().await;

        match target.fetch_stats().await {
            Ok(stats) => {
                println!("{} {}", "STATS".blue(), render_stats_line(&stats));
            }
            Err(e) => {
                println!("{}", "STATS ERR".yellow());
                tracing::debug!(error = %e, "status poll failed");
            }
        }
    }
}

/// Render one compact line summarizing all backend records
///
/// Live backends show `host:conn_count`; backends the balancer marks dead
/// show a `down` marker instead of a count.
pub fn render_stats_line(records: &[BackendStatus]) -> String {
    records
        .iter()
        .map(|b| {
            if b.alive {
                format!("{}:{}", b.host(), b.conn_count)
            } else {
                format!("{}:down", b.host())
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
