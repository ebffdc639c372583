// Feed events
//
// Every state change in the feed is one of these. They come from three
// places: terminal input (search edits, tag toggles), the loading timer,
// and the sentinel observer.

use crate::posts::PostId;

/// Input to the feed reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The simulated loading delay has elapsed
    LoadingElapsed,

    /// The search text was replaced with a new value
    SearchChanged(String),

    /// A tag was clicked in the tag bar
    TagToggled(String),

    /// The watched sentinel card scrolled into view
    SentinelVisible(PostId),
}

impl FeedEvent {
    /// Short name for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FeedEvent::LoadingElapsed => "loading_elapsed",
            FeedEvent::SearchChanged(_) => "search_changed",
            FeedEvent::TagToggled(_) => "tag_toggled",
            FeedEvent::SentinelVisible(_) => "sentinel_visible",
        }
    }
}
