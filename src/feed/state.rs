//! Feed state and reducer
//!
//! The feed is a small state machine:
//!
//! ```text
//! Loading ──LoadingElapsed──▶ Ready
//!                               │  SearchChanged / TagToggled  → re-filter, reset reveal
//!                               │  SentinelVisible(sentinel)   → reveal more
//! ```
//!
//! [`reduce`] is pure: it takes the current state and an event and returns
//! the next state. Side effects (timers, observers) live in the controller.

use super::event::FeedEvent;
use crate::config::FeedConfig;
use crate::filter::{filter_indices, FilterQuery};
use crate::posts::{self, Post, PostId};

/// Loading phase of the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Content not ready yet; only a spinner is shown
    #[default]
    Loading,
    /// Search, tags and results are live
    Ready,
}

/// Complete state of the post feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    phase: Phase,
    query: FilterQuery,
    /// Indices into `posts::all()` matching `query`, in dataset order
    filtered: Vec<usize>,
    /// Number of filtered posts currently rendered
    visible_count: usize,
    /// Bumped whenever the rendered list changes (re-filter or reveal)
    revision: u64,
    initial_visible: usize,
    reveal_step: usize,
}

impl FeedState {
    pub fn new(config: &FeedConfig) -> Self {
        let query = FilterQuery::default();
        let filtered = filter_indices(posts::all(), &query);
        let visible_count = config.initial_visible.min(filtered.len());

        Self {
            phase: Phase::Loading,
            query,
            filtered,
            visible_count,
            revision: 0,
            initial_visible: config.initial_visible,
            reveal_step: config.reveal_step,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of posts matching the current query
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All posts matching the current query
    pub fn filtered_posts(&self) -> impl Iterator<Item = &'static Post> + '_ {
        let all = posts::all();
        self.filtered.iter().map(move |&idx| &all[idx])
    }

    /// The rendered prefix of the filtered posts
    pub fn visible_posts(&self) -> impl Iterator<Item = &'static Post> + '_ {
        self.filtered_posts().take(self.visible_count)
    }

    /// The last rendered post, watched to trigger further reveal
    pub fn sentinel(&self) -> Option<PostId> {
        if self.phase != Phase::Ready || self.visible_count == 0 {
            return None;
        }
        let idx = self.filtered[self.visible_count - 1];
        Some(posts::all()[idx].id)
    }

    /// Whether a reveal would show additional posts
    pub fn has_more(&self) -> bool {
        self.visible_count < self.filtered.len()
    }

    /// Replace the query, re-filtering only when it actually changed
    fn apply_query(mut self, query: FilterQuery) -> Self {
        if query == self.query {
            return self;
        }
        self.filtered = filter_indices(posts::all(), &query);
        self.query = query;
        self.visible_count = self.initial_visible.min(self.filtered.len());
        self.revision += 1;
        self
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(&FeedConfig::default())
    }
}

/// Apply one event to the feed state
pub fn reduce(state: FeedState, event: &FeedEvent) -> FeedState {
    match event {
        FeedEvent::LoadingElapsed => on_loading_elapsed(state),
        FeedEvent::SearchChanged(term) => on_search_changed(state, term),
        FeedEvent::TagToggled(tag) => on_tag_toggled(state, tag),
        FeedEvent::SentinelVisible(id) => on_sentinel_visible(state, *id),
    }
}

fn on_loading_elapsed(mut state: FeedState) -> FeedState {
    if state.phase == Phase::Loading {
        state.phase = Phase::Ready;
        state.revision += 1;
    }
    state
}

fn on_search_changed(state: FeedState, term: &str) -> FeedState {
    if state.is_loading() {
        return state;
    }
    let query = FilterQuery {
        search_term: term.to_string(),
        ..state.query.clone()
    };
    state.apply_query(query)
}

fn on_tag_toggled(state: FeedState, tag: &str) -> FeedState {
    if state.is_loading() {
        return state;
    }
    if !posts::available_tags().contains(&tag) {
        tracing::debug!(tag, "Ignoring toggle of unknown tag");
        return state;
    }
    let mut query = state.query.clone();
    query.toggle_tag(tag);
    state.apply_query(query)
}

fn on_sentinel_visible(mut state: FeedState, id: PostId) -> FeedState {
    // Notifications for a card that is no longer last are stale
    if state.sentinel() != Some(id) || !state.has_more() {
        return state;
    }
    state.visible_count = (state.visible_count + state.reveal_step).min(state.filtered.len());
    state.revision += 1;
    state
}
