//! Search bar component
//!
//! Owns the text being edited and emits `SearchChanged` with the full new
//! term on every edit. The feed holds the authoritative query; this buffer
//! only mirrors it.

use crate::feed::FeedEvent;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crate::util::truncate_to_width;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const PLACEHOLDER: &str = "Search blogs, authors, topics...";

#[derive(Debug, Default)]
pub struct SearchBar {
    input: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    fn changed(&self) -> Handled {
        Handled::Dispatch(FeedEvent::SearchChanged(self.input.clone()))
    }

    fn clear(&mut self) -> Handled {
        if self.input.is_empty() {
            return Handled::Yes;
        }
        self.input.clear();
        self.changed()
    }
}

impl Component for SearchBar {
    fn id(&self) -> ComponentId {
        ComponentId::Search
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let theme = ctx.theme;

        let border_color = if focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(" Search ");
        let inner = block.inner(area);

        // Prompt, then the text; the tail stays visible while typing
        let prefix = "› ";
        let room = (inner.width as usize).saturating_sub(prefix.width() + 1);
        let line = if self.input.is_empty() {
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(theme.muted)),
                Span::styled(
                    truncate_to_width(PLACEHOLDER, room),
                    Style::default()
                        .fg(theme.muted)
                        .add_modifier(Modifier::ITALIC),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(theme.highlight)),
                Span::styled(
                    visible_tail(&self.input, room),
                    Style::default().fg(theme.foreground),
                ),
            ])
        };

        f.render_widget(Paragraph::new(line).block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            let typed = visible_tail(&self.input, room).width();
            let x = inner.x + (prefix.width() + typed).min(inner.width as usize - 1) as u16;
            f.set_cursor_position(Position::new(x, inner.y));
        }
    }
}

impl Interactive for SearchBar {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char(_) if ctrl => Handled::No,
            KeyCode::Char(c) => {
                self.input.push(c);
                self.changed()
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.changed()
                } else {
                    Handled::Yes
                }
            }
            // Esc clears; with nothing to clear it bubbles up (focus moves on)
            KeyCode::Esc if !self.input.is_empty() => self.clear(),
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("type:search  ^U/Esc:clear  Enter:results")
    }
}

/// Longest suffix of `s` that fits in `width` columns
fn visible_tail(s: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(bar: &mut SearchBar, s: &str) -> Handled {
        let mut last = Handled::No;
        for c in s.chars() {
            last = bar.handle_key(key(KeyCode::Char(c)));
        }
        last
    }

    #[test]
    fn typing_emits_full_term() {
        let mut bar = SearchBar::new();
        let handled = type_str(&mut bar, "rea");
        assert_eq!(
            handled,
            Handled::Dispatch(FeedEvent::SearchChanged("rea".into()))
        );
    }

    #[test]
    fn repeated_letters_are_kept() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "www");
        assert_eq!(bar.text(), "www");
    }

    #[test]
    fn backspace_and_clear() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "css");
        assert_eq!(
            bar.handle_key(key(KeyCode::Backspace)),
            Handled::Dispatch(FeedEvent::SearchChanged("cs".into()))
        );

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(
            bar.handle_key(ctrl_u),
            Handled::Dispatch(FeedEvent::SearchChanged(String::new()))
        );
        assert_eq!(bar.handle_key(key(KeyCode::Backspace)), Handled::Yes);
    }

    #[test]
    fn esc_clears_then_bubbles() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "web");
        assert!(matches!(
            bar.handle_key(key(KeyCode::Esc)),
            Handled::Dispatch(_)
        ));
        assert_eq!(bar.handle_key(key(KeyCode::Esc)), Handled::No);
    }

    #[test]
    fn navigation_keys_bubble() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_key(key(KeyCode::Enter)), Handled::No);
        assert_eq!(bar.handle_key(key(KeyCode::Down)), Handled::No);
        assert_eq!(bar.handle_key(key(KeyCode::Tab)), Handled::No);
    }

    #[test]
    fn visible_tail_keeps_end_of_input() {
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("hi", 5), "hi");
    }
}
