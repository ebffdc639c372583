//! Feed controller
//!
//! Owns the feed state and the two resources attached to it:
//! - the one-shot [`LoadingTimer`], acquired at start
//! - the [`SentinelObserver`], re-attached whenever the last rendered card changes
//!
//! Both are released by [`FeedController::teardown`], which also runs on drop.
//! The event receiver is handed back to the caller at start so the event loop
//! can `select!` on it without borrowing the controller.

use super::event::FeedEvent;
use super::observer::SentinelObserver;
use super::state::{reduce, FeedState};
use super::timer::LoadingTimer;
use crate::config::FeedConfig;
use crate::posts::PostId;
use tokio::sync::mpsc;

/// Only the loading timer sends on this channel
const FEED_CHANNEL_CAPACITY: usize = 16;

pub struct FeedController {
    state: FeedState,
    observer: SentinelObserver,
    timer: Option<LoadingTimer>,
    /// (sentinel, revision) the observer is currently attached for
    observed: Option<(PostId, u64)>,
}

impl FeedController {
    /// Create the controller and start the loading timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: &FeedConfig) -> (Self, mpsc::Receiver<FeedEvent>) {
        let (tx, rx) = mpsc::channel(FEED_CHANNEL_CAPACITY);
        let timer = LoadingTimer::start(config.loading_delay(), tx);

        let controller = Self {
            state: FeedState::new(config),
            observer: SentinelObserver::new(config.visibility_threshold),
            timer: Some(timer),
            observed: None,
        };
        (controller, rx)
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Sentinel the observer is attached to
    pub fn observed_sentinel(&self) -> Option<PostId> {
        self.observer.watched()
    }

    /// Run an event through the reducer and resync the observer
    pub fn dispatch(&mut self, event: FeedEvent) {
        let before = self.state.revision();
        self.state = reduce(std::mem::take(&mut self.state), &event);

        if self.state.revision() != before {
            tracing::debug!(
                event = event.kind(),
                visible = self.state.visible_count(),
                matching = self.state.filtered_count(),
                "Feed updated"
            );
        }

        if matches!(event, FeedEvent::LoadingElapsed) {
            // Fired; nothing left to cancel
            self.timer = None;
        }

        self.sync_observer();
    }

    /// Forward a visibility measurement of card `id` to the observer.
    ///
    /// Returns true if it triggered a state change.
    pub fn report_visibility(&mut self, id: PostId, visible_ratio: f32) -> bool {
        match self.observer.report(id, visible_ratio) {
            Some(event) => {
                let before = self.state.revision();
                self.dispatch(event);
                self.state.revision() != before
            }
            None => false,
        }
    }

    /// Release the timer and the observer
    pub fn teardown(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.observer.disconnect();
        self.observed = None;
    }

    /// Attach the observer to the current sentinel, or detach if there is none.
    ///
    /// Re-attaches when either the sentinel id or the list revision changed,
    /// so a re-filter that keeps the same last card still re-arms the watch.
    fn sync_observer(&mut self) {
        let target = self
            .state
            .sentinel()
            .map(|id| (id, self.state.revision()));

        if target == self.observed {
            return;
        }

        match target {
            Some((id, _)) => self.observer.observe(id),
            None => self.observer.disconnect(),
        }
        self.observed = target;
    }
}

impl Drop for FeedController {
    fn drop(&mut self) {
        self.teardown();
    }
}
