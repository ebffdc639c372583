//! Tag bar component
//!
//! Shows every available tag as a chip. Selected tags (read from the feed
//! query at render time) are filled; the cursor chip is underlined while the
//! bar has focus. Chips wrap onto extra rows on narrow terminals.

use crate::feed::FeedEvent;
use crate::posts;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Columns between chips
const CHIP_GAP: usize = 1;

pub struct TagBar {
    tags: Vec<&'static str>,
    cursor: usize,
}

impl TagBar {
    pub fn new() -> Self {
        Self {
            tags: posts::available_tags(),
            cursor: 0,
        }
    }

    /// Tag under the cursor
    pub fn current(&self) -> Option<&'static str> {
        self.tags.get(self.cursor).copied()
    }

    /// Rows needed (including borders) to show every chip at this width
    pub fn height_for(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2) as usize;
        chip_rows(&self.tags, inner).len().max(1) as u16 + 2
    }

    fn move_left(&mut self) {
        if !self.tags.is_empty() {
            self.cursor = (self.cursor + self.tags.len() - 1) % self.tags.len();
        }
    }

    fn move_right(&mut self) {
        if !self.tags.is_empty() {
            self.cursor = (self.cursor + 1) % self.tags.len();
        }
    }
}

impl Default for TagBar {
    fn default() -> Self {
        Self::new()
    }
}

fn chip_label(tag: &str) -> String {
    format!(" #{} ", tag)
}

/// Greedily pack chips into rows of at most `width` columns.
/// A chip wider than a row gets a row to itself.
fn chip_rows(tags: &[&str], width: usize) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut used = 0;

    for (idx, tag) in tags.iter().enumerate() {
        let w = chip_label(tag).width();
        let needed = if current.is_empty() { w } else { used + CHIP_GAP + w };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = w;
        } else {
            used = needed;
        }
        current.push(idx);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

impl Component for TagBar {
    fn id(&self) -> ComponentId {
        ComponentId::Tags
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let theme = ctx.theme;
        let query = ctx.feed.query();

        let selected = query.selected_tags.len();
        let title = if selected > 0 {
            format!(" Tags ({} selected) ", selected)
        } else {
            " Tags ".to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(if focused {
                theme.border_focused
            } else {
                theme.border
            }))
            .title(title);
        let inner = block.inner(area);

        let lines: Vec<Line> = chip_rows(&self.tags, inner.width as usize)
            .into_iter()
            .map(|row| {
                let mut spans = Vec::new();
                for (i, idx) in row.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" ".repeat(CHIP_GAP)));
                    }
                    let tag = self.tags[idx];
                    let mut style = if query.is_tag_selected(tag) {
                        Style::default()
                            .fg(theme.tag_selected_fg)
                            .bg(theme.tag_selected_bg)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.tag)
                    };
                    if focused && idx == self.cursor {
                        style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
                    }
                    spans.push(Span::styled(chip_label(tag), style));
                }
                Line::from(spans)
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Interactive for TagBar {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_left();
                Handled::Yes
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_right();
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.current() {
                Some(tag) => Handled::Dispatch(FeedEvent::TagToggled(tag.to_string())),
                None => Handled::Yes,
            },
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("←→:move  Enter/Space:toggle  c:clear")
    }
}
