//! CLI argument parsing and run wiring

use crate::config::RunConfig;
use crate::orchestrator::OrchestratorBuilder;
use crate::target::HttpTarget;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;

/// lbprobe - visual load harness for a load balancer under test
#[derive(Parser, Debug)]
#[command(name = "lbprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the load balancer under test
    #[arg(short, long, default_value = "http://localhost:3030")]
    pub base_url: String,

    /// Total number of requests to send
    #[arg(short, long, default_value = "100")]
    pub requests: usize,

    /// Concurrency level (number of worker tasks)
    #[arg(short, long, default_value = "20")]
    pub concurrency: usize,

    /// Fraction of requests sent to the slow endpoint (0.0 - 1.0)
    #[arg(short, long, default_value = "0.3")]
    pub slow_ratio: f64,

    /// Interval between status polls, in milliseconds
    #[arg(long, default_value = "500")]
    pub poll_interval_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Run the probe based on CLI arguments
    pub async fn run(&self) -> Result<()> {
        let config = RunConfig::new(self.base_url.trim_end_matches('/'))
            .with_total_requests(self.requests)
            .with_concurrency(self.concurrency)
            .with_slow_ratio(self.slow_ratio)
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms));

        config.validate().context("invalid arguments")?;

        println!("{}", "Starting Visual Load Test...".cyan());
        println!("Target: {}", config.base_url);
        println!(
            "Requests: {} (Mix: {}% slow)",
            config.total_requests,
            (config.slow_ratio * 100.0).round() as u32
        );
        println!("Concurrency: {}", config.concurrency);
        println!("{}", "-".repeat(40));

        let target = Arc::new(HttpTarget::new(&config.base_url));

        let orchestrator = OrchestratorBuilder::new()
            .config(config)
            .target(target)
            .build()
            .context("failed to build orchestrator")?;

        let report = orchestrator.run_with_signal_handling().await?;

        println!("{}", "-".repeat(40));
        println!(
            "{}",
            format!("Test Completed in {:.2}s", report.elapsed.as_secs_f64()).cyan()
        );
        println!();
        println!("Distribution Report:");
        print!("{}", report.render());

        Ok(())
    }
}
