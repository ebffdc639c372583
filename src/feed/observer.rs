// Sentinel visibility observer
//
// Watches a single post card and turns raw visibility measurements into
// feed events. The renderer measures how much of a card is on screen after
// each frame and reports it here; the observer only speaks up when the
// watched card crosses into the visible state.
//
// A new `observe` call replaces the previous watch, so there is never more
// than one active watch.

use super::event::FeedEvent;
use crate::posts::PostId;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Watch {
    id: PostId,
    /// Last known state; None until the first measurement after `observe`
    intersecting: Option<bool>,
}

/// Emits `SentinelVisible` when the watched card becomes visible
#[derive(Debug, Clone)]
pub struct SentinelObserver {
    /// Fraction of the card (0.0..=1.0) that must be on screen
    threshold: f32,
    watch: Option<Watch>,
}

impl SentinelObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            watch: None,
        }
    }

    /// Start watching `id`, replacing any current watch
    pub fn observe(&mut self, id: PostId) {
        if let Some(previous) = self.watch {
            tracing::trace!(from = previous.id, to = id, "Re-attaching sentinel observer");
        }
        self.watch = Some(Watch {
            id,
            intersecting: None,
        });
    }

    /// Stop watching
    pub fn disconnect(&mut self) {
        if let Some(watch) = self.watch.take() {
            tracing::trace!(id = watch.id, "Sentinel observer disconnected");
        }
    }

    /// Currently watched card, if any
    pub fn watched(&self) -> Option<PostId> {
        self.watch.map(|w| w.id)
    }

    /// Feed a visibility measurement for card `id`.
    ///
    /// Returns an event when the watched card enters the intersecting state.
    /// Measurements for other cards are ignored.
    pub fn report(&mut self, id: PostId, visible_ratio: f32) -> Option<FeedEvent> {
        let threshold = self.threshold;
        let watch = self.watch.as_mut().filter(|w| w.id == id)?;

        let intersecting = visible_ratio >= threshold;
        let was_intersecting = watch.intersecting.replace(intersecting);

        if intersecting && was_intersecting != Some(true) {
            Some(FeedEvent::SentinelVisible(id))
        } else {
            None
        }
    }
}
