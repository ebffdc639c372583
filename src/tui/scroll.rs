// Scroll state shared by the results and logs panels
//
// Each component owns its scroll state; App just renders and routes input.
// Offsets are in lines for the results panel and in entries for the logs
// panel. The logs panel auto-follows new entries; the results panel never
// does, because revealing more posts must not yank the view downwards.

/// Scroll state for a single panel
///
/// Owns all state needed for scrolling: position, content size, viewport size.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line/item index at top of viewport)
    offset: usize,

    /// Total number of items/lines in content
    total: usize,

    /// Number of items/lines visible in viewport
    viewport: usize,

    /// Whether to keep the view pinned to the bottom as content grows.
    /// User scrolling up disables this; scrolling to bottom re-enables.
    pub auto_follow: bool,

    /// False for manual panels, which never start following
    can_follow: bool,
}

impl ScrollState {
    /// Create new scroll state with auto-follow enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
            can_follow: true,
        }
    }

    /// Create scroll state with auto-follow disabled (manual scroll)
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            can_follow: false,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions.
    /// Call this each render frame with current sizes.
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Scroll up by one unit
    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    /// Scroll down by one unit
    pub fn scroll_down(&mut self) {
        // Before the first render total is 0; the next update clamps
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }
        self.refollow();
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
        self.refollow();
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.refollow();
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end.max(start))
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Resume following once the user is back at the bottom
    fn refollow(&mut self) {
        if self.can_follow && self.total > 0 && self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follow_on_new_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_scroll_up_disables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14);
    }

    #[test]
    fn test_scroll_to_bottom_resumes_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        scroll.scroll_up();
        scroll.scroll_to_bottom();
        assert!(scroll.auto_follow);

        let mut manual = ScrollState::manual();
        manual.update_dimensions(20, 5);
        manual.scroll_to_bottom();
        assert!(!manual.auto_follow);
    }

    #[test]
    fn test_manual_scroll_stays_put_as_content_grows() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 0);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_offset_clamped_when_content_shrinks() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(30, 10);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 20);

        scroll.update_dimensions(12, 10);
        assert_eq!(scroll.offset(), 2);
    }

    #[test]
    fn test_paging() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(25, 10);

        scroll.page_down();
        assert_eq!(scroll.offset(), 10);
        scroll.page_down();
        assert_eq!(scroll.offset(), 15);
        scroll.page_up();
        assert_eq!(scroll.offset(), 5);
        scroll.scroll_to_top();
        assert_eq!(scroll.visible_range(), (0, 10));
    }
}
