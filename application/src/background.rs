//! Detached background work that must outlive the request that started it.
//!
//! Prompt dispatches and audit writes are spawned here instead of bare
//! `tokio::spawn` so the binary can drain them during graceful shutdown.

use std::future::Future;
use std::time::Duration;
use tokio_util::task::TaskTracker;
use tracing::{info, warn};

/// Tracker for fire-and-forget tasks.
///
/// Cloning is cheap; all clones share one tracker.
#[derive(Clone, Default)]
pub struct BackgroundTasks {
    tracker: TaskTracker,
}

impl BackgroundTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a detached task. The caller does not get a handle.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tracker.spawn(future);
    }

    /// Number of tasks still running
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Close the tracker and wait for in-flight tasks.
    ///
    /// Returns `true` if everything finished before `grace` elapsed.
    pub async fn drain(&self, grace: Duration) -> bool {
        self.tracker.close();
        let pending = self.tracker.len();
        if pending == 0 {
            return true;
        }

        info!("Waiting for {} background task(s) to finish", pending);
        match tokio::time::timeout(grace, self.tracker.wait()).await {
            Ok(()) => true,
            Err(_) => {
                warn!(
                    "{} background task(s) still running after {:?}; abandoning",
                    self.tracker.len(),
                    grace
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn drain_waits_for_spawned_work() {
        let tasks = BackgroundTasks::new();
        let done = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&done);
        tasks.spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            flag.store(true, Ordering::SeqCst);
        });

        assert!(tasks.drain(Duration::from_secs(5)).await);
        assert!(done.load(Ordering::SeqCst));
        assert_eq!(tasks.in_flight(), 0);
    }

    #[tokio::test]
    async fn drain_gives_up_after_grace() {
        let tasks = BackgroundTasks::new();
        tasks.spawn(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        assert!(!tasks.drain(Duration::from_millis(20)).await);
    }

    #[tokio::test]
    async fn drain_with_nothing_pending_returns_immediately() {
        let tasks = BackgroundTasks::new();
        assert!(tasks.drain(Duration::from_millis(1)).await);
    }
}
