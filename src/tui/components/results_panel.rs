//! Results panel component
//!
//! Renders the visible prefix of the filtered posts as cards and scrolls
//! through them line by line. Every card has the same height, so card
//! positions are pure arithmetic: card `i` starts at line `i * CARD_STRIDE`.
//! That lets the app measure how much of the sentinel card is on screen
//! after each frame ([`card_visibility`]) without asking the renderer.
//!
//! ```text
//! ╭──────────────────────────────────────────╮
//! │ Introduction to React Hooks              │
//! │ Discover the power of React Hooks and h… │
//! │ #react #javascript #programming  By Jane │
//! ╰──────────────────────────────────────────╯
//! ```

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::filter::FilterQuery;
use crate::posts::Post;
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable,
};
use crate::util::{pad_to_width, truncate_to_width};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows per card: border, title, excerpt, meta, border
pub const CARD_HEIGHT: usize = 5;
/// Blank rows between cards
pub const CARD_GAP: usize = 1;
const CARD_STRIDE: usize = CARD_HEIGHT + CARD_GAP;

pub const NO_RESULTS: &str = "No results found";

pub struct ResultsPanel {
    /// Line-based scroll; never auto-follows
    scroll: ScrollState,
}

impl ResultsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
        }
    }

    /// Sync content height with the feed (call each frame before render)
    pub fn sync(&mut self, cards: usize, viewport: usize) {
        self.scroll.update_dimensions(content_lines(cards), viewport);
    }

    /// Back to the first card (after the query changes)
    pub fn reset(&mut self) {
        self.scroll.scroll_to_top();
    }

    /// Fraction of card `index` inside the viewport, as of the last sync
    pub fn visibility_of(&self, index: usize) -> f32 {
        card_visibility(index, self.scroll.offset(), self.scroll.viewport())
    }

    /// Index of the first card at least partly on screen
    pub fn top_card(&self, cards: usize) -> Option<usize> {
        if cards == 0 {
            return None;
        }
        Some((self.scroll.offset() / CARD_STRIDE).min(cards - 1))
    }
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Total content lines for `cards` cards: each card plus its gap, then a
/// one-line footer
fn content_lines(cards: usize) -> usize {
    if cards == 0 {
        0
    } else {
        cards * CARD_STRIDE + 1
    }
}

/// Fraction (0.0..=1.0) of card `index` between `offset` and
/// `offset + viewport`
///
/// A viewport shorter than a card can never show all of it, so a card
/// filling the whole viewport counts as fully visible.
pub fn card_visibility(index: usize, offset: usize, viewport: usize) -> f32 {
    let rows = CARD_HEIGHT.min(viewport);
    if rows == 0 {
        return 0.0;
    }
    let top = index * CARD_STRIDE;
    let bottom = top + CARD_HEIGHT;
    let overlap = bottom
        .min(offset + viewport)
        .saturating_sub(top.max(offset));
    overlap as f32 / rows as f32
}

impl Component for ResultsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Results
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let feed = ctx.feed;
        let focused = ctx.is_focused(self.id());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(if focused {
                theme.border_focused
            } else {
                theme.border
            }))
            .title(" Posts ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        if feed.filtered_count() == 0 {
            let y = inner.y + inner.height / 2;
            let line_area = Rect::new(inner.x, y, inner.width, inner.height.min(1));
            let empty = Paragraph::new(NO_RESULTS)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted));
            f.render_widget(empty, line_area);
            return;
        }

        // Leave the rightmost column for the scrollbar
        let width = inner.width.saturating_sub(1) as usize;
        let mut lines: Vec<Line> = Vec::new();
        for post in feed.visible_posts() {
            lines.extend(card_lines(post, width, theme, feed.query()));
            lines.extend((0..CARD_GAP).map(|_| Line::raw("")));
        }

        let footer = if feed.has_more() {
            format!(
                "↓ scroll for more ({} of {})",
                feed.visible_count(),
                feed.filtered_count()
            )
        } else {
            "· end of results ·".to_string()
        };
        lines.push(
            Line::from(Span::styled(footer, Style::default().fg(theme.muted))).centered(),
        );

        let content = Rect::new(inner.x, inner.y, width as u16, inner.height);
        let paragraph = Paragraph::new(lines).scroll((self.scroll.offset() as u16, 0));
        f.render_widget(paragraph, content);

        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Arrows);
    }
}

/// The `CARD_HEIGHT` lines of one post card, exactly `width` columns wide
fn card_lines(post: &Post, width: usize, theme: &Theme, query: &FilterQuery) -> Vec<Line<'static>> {
    let width = width.max(6);
    let inner = width - 4;
    let border = Style::default().fg(theme.card_border);
    let side = |content: Vec<Span<'static>>| {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(content);
        spans.push(Span::styled(" │", border));
        Line::from(spans)
    };

    let top = Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(width - 2)),
        border,
    ));
    let bottom = Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        border,
    ));

    let title = side(vec![Span::styled(
        pad_to_width(post.title, inner),
        Style::default()
            .fg(theme.card_title)
            .add_modifier(Modifier::BOLD),
    )]);
    let excerpt = side(vec![Span::styled(
        pad_to_width(post.excerpt, inner),
        Style::default().fg(theme.card_excerpt),
    )]);
    let meta = side(meta_spans(post, inner, theme, query));

    vec![top, title, excerpt, meta, bottom]
}

/// Tag chips on the left, "By author" on the right, `width` columns total
fn meta_spans(post: &Post, width: usize, theme: &Theme, query: &FilterQuery) -> Vec<Span<'static>> {
    let author = truncate_to_width(&format!("By {}", post.author), width);
    let author_width = author.width();
    let room = width.saturating_sub(author_width + 1);

    let mut spans = Vec::new();
    let mut used = 0;
    for (i, tag) in post.tags.iter().enumerate() {
        let chip = format!("#{}", tag);
        let sep = usize::from(i > 0);
        if used + sep + chip.width() > room {
            if used < room {
                spans.push(Span::styled("…", Style::default().fg(theme.muted)));
                used += 1;
            }
            break;
        }
        if sep > 0 {
            spans.push(Span::raw(" "));
        }
        used += sep + chip.width();
        let style = if query.is_tag_selected(tag) {
            Style::default()
                .fg(theme.tag_selected_fg)
                .bg(theme.tag_selected_bg)
        } else {
            Style::default().fg(theme.tag)
        };
        spans.push(Span::styled(chip, style));
    }

    let fill = width.saturating_sub(used + author_width);
    spans.push(Span::raw(" ".repeat(fill)));
    spans.push(Span::styled(
        author,
        Style::default()
            .fg(theme.card_author)
            .add_modifier(Modifier::ITALIC),
    ));
    spans
}

impl Scrollable for ResultsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for ResultsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  PgUp/PgDn  y/Y:copy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{reduce, FeedEvent, FeedState};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn ready() -> FeedState {
        reduce(FeedState::default(), &FeedEvent::LoadingElapsed)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(panel: &mut ResultsPanel, feed: &FeedState, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        panel.sync(feed.visible_count(), height.saturating_sub(2) as usize);
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, ComponentId::Results, 0, feed);
                panel.render(f, f.area(), &ctx);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn visibility_of_cards() {
        // Card 0 spans lines 0..5, card 1 spans 6..11
        assert_eq!(card_visibility(0, 0, 10), 1.0);
        assert_eq!(card_visibility(1, 0, 10), 0.8);
        assert_eq!(card_visibility(1, 0, 8), 0.4);
        assert_eq!(card_visibility(1, 0, 6), 0.0);
        assert_eq!(card_visibility(0, 3, 10), 0.4);
        assert_eq!(card_visibility(0, 0, 0), 0.0);
    }

    #[test]
    fn short_viewport_measures_against_its_own_height() {
        // Two rows can hold at most two lines of a card
        assert_eq!(card_visibility(0, 0, 2), 1.0);
        assert_eq!(card_visibility(1, 6, 2), 1.0);
        assert_eq!(card_visibility(1, 5, 2), 0.5);
        assert_eq!(card_visibility(1, 0, 2), 0.0);
        assert_eq!(card_visibility(0, 0, 1), 1.0);
    }

    #[test]
    fn top_card_follows_offset() {
        let mut panel = ResultsPanel::new();
        panel.sync(4, 5);
        assert_eq!(panel.top_card(4), Some(0));
        for _ in 0..7 {
            panel.scroll_down();
        }
        assert_eq!(panel.top_card(4), Some(1));
        assert_eq!(panel.top_card(0), None);
    }

    #[test]
    fn renders_first_two_posts_after_loading() {
        let mut panel = ResultsPanel::new();
        let text = draw(&mut panel, &ready(), 70, 20);
        assert!(text.contains("Introduction to React Hooks"));
        assert!(text.contains("Tailwind CSS Best Practices"));
        assert!(text.contains("By Jane Doe"));
        assert!(!text.contains("Advanced JavaScript Techniques"));
        assert!(text.contains("scroll for more (2 of 4)"));
    }

    #[test]
    fn renders_no_results_found() {
        let feed = reduce(ready(), &FeedEvent::SearchChanged("zzz-no-match".into()));
        let mut panel = ResultsPanel::new();
        let text = draw(&mut panel, &feed, 60, 12);
        assert!(text.contains(NO_RESULTS));
    }

    #[test]
    fn short_viewport_hides_most_of_sentinel() {
        let feed = ready();
        let mut panel = ResultsPanel::new();
        // 8 rows inside the border: card 0 fully, card 1 two of five rows
        panel.sync(feed.visible_count(), 8);
        assert_eq!(panel.visibility_of(0), 1.0);
        assert_eq!(panel.visibility_of(1), 0.4);

        panel.scroll_down();
        panel.scroll_down();
        assert_eq!(panel.visibility_of(1), 0.8);
    }

    #[test]
    fn meta_line_fits_width() {
        let theme = Theme::default();
        let post = &crate::posts::all()[0];
        for width in [10, 20, 40, 80] {
            let spans = meta_spans(post, width, &theme, &FilterQuery::default());
            let total: usize = spans.iter().map(|s| s.content.width()).sum();
            assert_eq!(total, width, "width {}", width);
        }
    }
}
