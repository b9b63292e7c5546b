//! Final distribution report

use crate::tally::BackendCounts;

use std::fmt::Write as _;
use std::time::Duration;

/// Aggregated result of one probe run
///
/// Built by the orchestrator after every worker has terminated; the table
/// rows reflect successful outcomes only, failures appear as a count below.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Per-backend counters, sorted by backend identity
    pub rows: Vec<(String, BackendCounts)>,

    /// Total successful requests across all workers
    pub completed: usize,

    /// Total failed requests across all workers
    pub failed: usize,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl RunReport {
    /// Sum of all table counts (equals `completed` after a full drain)
    pub fn table_total(&self) -> u64 {
        self.rows.iter().map(|(_, counts)| counts.total()).sum()
    }

    /// Render the fixed-width distribution table plus summary lines
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{:<20} | {:<10} | {:<10} | {:<10}",
            "Backend", "Fast Req", "Slow Req", "Total"
        );
        let _ = writeln!(out, "{}", "-".repeat(60));

        let mut fast_total = 0u64;
        let mut slow_total = 0u64;
        for (backend, counts) in &self.rows {
            fast_total += counts.fast;
            slow_total += counts.slow;
            let _ = writeln!(
                out,
                "{:<20} | {:<10} | {:<10} | {:<10}",
                backend,
                counts.fast,
                counts.slow,
                counts.total()
            );
        }

        let _ = writeln!(out, "{}", "-".repeat(60));
        let _ = writeln!(
            out,
            "{:<20} | {:<10} | {:<10} | {:<10}",
            "Total",
            fast_total,
            slow_total,
            fast_total + slow_total
        );

        if self.failed > 0 {
            let _ = writeln!(out, "Failed: {}", self.failed);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        RunReport {
            rows: vec![
                ("host-a".to_string(), BackendCounts { fast: 10, slow: 0 }),
                ("host-b".to_string(), BackendCounts { fast: 3, slow: 7 }),
            ],
            completed: 20,
            failed: 0,
            elapsed: Duration::from_secs(3),
        }
    }

    #[test]
    fn test_render_fixed_width_rows() {
        let rendered = sample_report().render();

        assert!(rendered.contains(&format!(
            "{:<20} | {:<10} | {:<10} | {:<10}",
            "host-a", 10, 0, 10
        )));
        assert!(rendered.contains(&format!(
            "{:<20} | {:<10} | {:<10} | {:<10}",
            "host-b", 3, 7, 10
        )));
    }

    #[test]
    fn test_render_header_and_totals() {
        let rendered = sample_report().render();

        assert!(rendered.contains("Backend"));
        assert!(rendered.contains(&format!(
            "{:<20} | {:<10} | {:<10} | {:<10}",
            "Total", 13, 7, 20
        )));
        assert!(!rendered.contains("Failed"));
    }

    #[test]
    fn test_render_failed_line() {
        let mut report = sample_report();
        report.failed = 4;

        assert!(report.render().contains("Failed: 4"));
    }

    #[test]
    fn test_table_total() {
        assert_eq!(sample_report().table_total(), 20);
    }

    #[test]
    fn test_render_empty_rows() {
        let report = RunReport {
            rows: Vec::new(),
            completed: 0,
            failed: 10,
            elapsed: Duration::from_secs(1),
        };

        let rendered = report.render();
        assert!(rendered.contains("Backend"));
        assert!(rendered.contains("Failed: 10"));
    }
}
