//! Cancellable one-shot timer on the tokio runtime

use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs a callback once after a delay. At most one callback is pending:
/// scheduling again cancels the previous one, as does dropping the timer.
#[derive(Debug, Default)]
pub struct OneShotTimer {
    handle: Option<JoinHandle<()>>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `callback` after `delay`, replacing anything already scheduled.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
    }

    /// Cancel the pending callback. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for OneShotTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = OneShotTimer::new();
        let started = tokio::time::Instant::now();

        timer.schedule(Duration::from_secs(5), move || {
            let _ = tx.send("fired");
        });
        assert!(timer.is_pending());

        assert_eq!(rx.recv().await, Some("fired"));
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_callback() {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let mut timer = OneShotTimer::new();
        timer.schedule(Duration::from_secs(5), move || {
            let _ = tx.send(());
        });

        assert!(timer.cancel());
        assert!(!timer.is_pending());
        // Sender was dropped with the aborted task, so the channel closes
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_supersedes_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = OneShotTimer::new();

        let first = tx.clone();
        timer.schedule(Duration::from_secs(5), move || {
            let _ = first.send(1);
        });
        timer.schedule(Duration::from_secs(5), move || {
            let _ = tx.send(2);
        });

        assert_eq!(rx.recv().await, Some(2));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_cancel_without_schedule() {
        let mut timer = OneShotTimer::new();
        assert!(!timer.cancel());
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        {
            let mut timer = OneShotTimer::new();
            timer.schedule(Duration::from_secs(1), move || {
                let _ = tx.send(());
            });
        }
        assert_eq!(rx.recv().await, None);
    }
}
