// Loading timer
//
// One-shot deferred task that marks the feed ready after a fixed delay.
// The handle is held by the controller and released on teardown; dropping
// it aborts the task so no event is delivered after the feed is gone.

use super::event::FeedEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Cancellable handle to the pending `LoadingElapsed` delivery
#[derive(Debug)]
pub struct LoadingTimer {
    handle: Option<JoinHandle<()>>,
}

impl LoadingTimer {
    /// Schedule `LoadingElapsed` on `tx` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(delay: Duration, tx: mpsc::Sender<FeedEvent>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(FeedEvent::LoadingElapsed).await.is_err() {
                tracing::debug!("Feed receiver gone before loading completed");
            }
        });
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Loading timer started");
        Self {
            handle: Some(handle),
        }
    }

    /// Whether the timer has not fired (or been cancelled) yet
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the timer if it has not fired. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                handle.abort();
                tracing::debug!("Loading timer cancelled");
            }
        }
    }
}

impl Drop for LoadingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fires_once_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let timer = LoadingTimer::start(Duration::from_millis(20), tx);
        assert!(timer.is_pending());

        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timer should fire");
        assert_eq!(event, Some(FeedEvent::LoadingElapsed));

        // Sender was moved into the task, so the channel closes after firing
        let next = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("channel should close");
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = LoadingTimer::start(Duration::from_millis(50), tx);
        timer.cancel();
        assert!(!timer.is_pending());

        // Aborting the task drops its sender, closing the channel without an event
        let next = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("channel should close");
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn dropping_timer_cancels_it() {
        let (tx, mut rx) = mpsc::channel(4);
        drop(LoadingTimer::start(Duration::from_millis(50), tx));

        let next = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("channel should close");
        assert_eq!(next, None);
    }
}
