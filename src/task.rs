//! Cancellable background work
//!
//! The dashboard runs every remote operation as a spawned task held in a
//! [`PendingTask`]. Replacing or dropping the guard aborts the task, so a
//! closed view or a superseded request never keeps a call running.

use std::future::Future;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Owns a spawned task and aborts it when dropped
#[derive(Debug)]
pub struct PendingTask<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> PendingTask<T> {
    /// Spawn `future` on `runtime`
    pub fn spawn<F>(runtime: &Handle, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: runtime.spawn(future),
        }
    }
}

impl<T> PendingTask<T> {
    /// Whether the task ran to completion or was aborted
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the task now
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl<T> Drop for PendingTask<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_drop_aborts_task() {
        let reached = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&reached);

        let task = PendingTask::spawn(&Handle::current(), async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });
        drop(task);

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_task_runs_while_held() {
        let reached = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&reached);

        let task = PendingTask::spawn(&Handle::current(), async move {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(reached.load(Ordering::SeqCst));
        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn test_explicit_abort() {
        let task = PendingTask::spawn(&Handle::current(), async {
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        task.abort();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(task.is_finished());
    }
}
