//! Workload generation and the shared work queue
//!
//! Generation is pure (a `Vec<WorkItem>`) and separated from enqueueing so
//! the fast/slow mix can be tested without a runtime. The queue itself is a
//! pre-filled mpsc channel whose sender is dropped after filling: once the
//! queue drains, `recv()` resolves to `None` and idle workers exit instead
//! of blocking.

use rand::Rng;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// One unit of work: which endpoint variant to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkItem {
    /// Plain request against `/`
    Fast,
    /// Artificially slow request against `/sleep`
    Slow,
}

impl WorkItem {
    /// Target path for this item kind
    pub fn path(&self) -> &'static str {
        match self {
            WorkItem::Fast => "/",
            WorkItem::Slow => "/sleep",
        }
    }

    /// True for the slow variant
    pub fn is_slow(&self) -> bool {
        matches!(self, WorkItem::Slow)
    }
}

/// Queue handle shared by all workers
///
/// The mutex is only held for the duration of one `recv()`, which resolves
/// immediately because the channel is fully filled and closed before any
/// worker starts.
pub type WorkQueue = Arc<Mutex<mpsc::Receiver<WorkItem>>>;

/// Generate exactly `total` items, each independently slow with probability
/// `slow_ratio`
pub fn generate(total: usize, slow_ratio: f64) -> Vec<WorkItem> {
    let mut rng = rand::thread_rng();
    (0..total)
        .map(|_| {
            if rng.gen_bool(slow_ratio.clamp(0.0, 1.0)) {
                WorkItem::Slow
            } else {
                WorkItem::Fast
            }
        })
        .collect()
}

/// Enqueue all items into a closed FIFO queue ready for workers to drain
pub fn fill_queue(items: Vec<WorkItem>) -> WorkQueue {
    let (tx, rx) = mpsc::channel(items.len().max(1));
    for item in items {
        // Capacity equals the item count, so try_send cannot fail here.
        tx.try_send(item).expect("queue sized to hold all items");
    }
    drop(tx);
    Arc::new(Mutex::new(rx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_exact_count() {
        for total in [0, 1, 7, 100] {
            assert_eq!(generate(total, 0.3).len(), total);
        }
    }

    #[test]
    fn test_generate_ratio_zero_all_fast() {
        assert!(generate(200, 0.0).iter().all(|i| *i == WorkItem::Fast));
    }

    #[test]
    fn test_generate_ratio_one_all_slow() {
        assert!(generate(200, 1.0).iter().all(|i| *i == WorkItem::Slow));
    }

    #[test]
    fn test_generate_ratio_statistical() {
        // Binomial(10_000, 0.3) has sigma ~46; a 10-sigma band will not flake.
        let items = generate(10_000, 0.3);
        let slow = items.iter().filter(|i| i.is_slow()).count();
        assert!((2540..=3460).contains(&slow), "slow count {slow} out of band");
    }

    #[test]
    fn test_item_paths() {
        assert_eq!(WorkItem::Fast.path(), "/");
        assert_eq!(WorkItem::Slow.path(), "/sleep");
    }

    #[tokio::test]
    async fn test_fill_queue_drains_exactly_once() {
        let queue = fill_queue(vec![WorkItem::Fast, WorkItem::Slow, WorkItem::Fast]);

        let mut drained = Vec::new();
        let mut rx = queue.lock().await;
        while let Some(item) = rx.recv().await {
            drained.push(item);
        }

        assert_eq!(
            drained,
            vec![WorkItem::Fast, WorkItem::Slow, WorkItem::Fast]
        );
        // Sender was dropped at fill time, so the channel stays closed.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_fill_queue_empty() {
        let queue = fill_queue(Vec::new());
        assert!(queue.lock().await.recv().await.is_none());
    }
}
