//! Rebuild publication — last-writer-wins at the subscriber boundary
//!
//! Every edit triggers a full rebuild (tree derivation + layout); the
//! pipeline itself is pure, CPU-bound, O(n) per edit, and safe to run on a
//! background executor. What must not happen is a slow, superseded rebuild
//! overwriting the result of a newer one. Rebuilds are therefore tagged with
//! a monotonically increasing revision when they begin, and [`RebuildPublisher::publish`]
//! drops any snapshot older than the one already installed. Computations are
//! not cancelled mid-flight; staleness is resolved here, at the boundary.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use super::layout::{LayoutBounds, PositionedNode};

/// One completed rebuild: positioned nodes and bounds, tagged with the
/// revision of the edit that triggered it
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub revision: u64,
    pub nodes: Vec<PositionedNode>,
    pub bounds: LayoutBounds,
}

/// Publishes rebuild results to subscribers, newest revision wins
#[derive(Debug)]
pub struct RebuildPublisher {
    next_revision: AtomicU64,
    tx: watch::Sender<Option<LayoutSnapshot>>,
}

impl Default for RebuildPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl RebuildPublisher {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            next_revision: AtomicU64::new(0),
            tx,
        }
    }

    /// Reserve the revision for a rebuild that is about to start
    ///
    /// Call once per edit, before snapshotting the member/edge set.
    pub fn begin(&self) -> u64 {
        self.next_revision.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install a finished rebuild unless a newer one already landed
    ///
    /// Returns `false` when the snapshot was stale and dropped.
    pub fn publish(&self, snapshot: LayoutSnapshot) -> bool {
        let mut installed = false;
        self.tx.send_if_modified(|current| {
            if let Some(existing) = current {
                if existing.revision >= snapshot.revision {
                    tracing::debug!(
                        stale = snapshot.revision,
                        installed = existing.revision,
                        "dropping superseded rebuild"
                    );
                    return false;
                }
            }
            *current = Some(snapshot);
            installed = true;
            true
        });
        installed
    }

    /// Subscribe to published snapshots
    pub fn subscribe(&self) -> watch::Receiver<Option<LayoutSnapshot>> {
        self.tx.subscribe()
    }

    /// Most recently installed snapshot, if any rebuild has completed
    pub fn latest(&self) -> Option<LayoutSnapshot> {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(revision: u64) -> LayoutSnapshot {
        LayoutSnapshot {
            revision,
            nodes: Vec::new(),
            bounds: LayoutBounds::ZERO,
        }
    }

    #[test]
    fn test_revisions_are_monotonic() {
        let publisher = RebuildPublisher::new();
        let a = publisher.begin();
        let b = publisher.begin();
        assert!(b > a);
    }

    #[test]
    fn test_stale_result_dropped() {
        let publisher = RebuildPublisher::new();
        let old = publisher.begin();
        let new = publisher.begin();

        // The newer rebuild finishes first.
        assert!(publisher.publish(snapshot(new)));
        assert!(!publisher.publish(snapshot(old)));
        assert_eq!(publisher.latest().map(|s| s.revision), Some(new));
    }

    #[tokio::test]
    async fn test_subscribers_only_see_newest() {
        let publisher = RebuildPublisher::new();
        let mut rx = publisher.subscribe();

        let old = publisher.begin();
        let new = publisher.begin();
        publisher.publish(snapshot(new));
        publisher.publish(snapshot(old));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().map(|s| s.revision), Some(new));
        // The stale publish must not have marked the channel changed again.
        assert!(!rx.has_changed().unwrap());
    }
}
