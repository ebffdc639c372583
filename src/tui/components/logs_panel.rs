//! Logs panel component
//!
//! Displays system log entries captured by the TUI log layer. Follows new
//! entries until the user scrolls up; `End` resumes following.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::{LogBuffer, LogEntry, LogLevel};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Scroll state (position, viewport, auto-follow)
    scroll: ScrollState,

    /// Snapshot of the buffer taken at the last sync
    entries: Vec<LogEntry>,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            entries: Vec::new(),
        }
    }

    /// Snapshot the shared buffer (call each frame before render).
    ///
    /// We don't own the LogBuffer because it's shared with the logging system.
    pub fn sync(&mut self, buffer: &LogBuffer, viewport_height: usize) {
        self.entries = buffer.get_all();
        self.scroll
            .update_dimensions(self.entries.len(), viewport_height);
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .map(|entry| {
                ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
            })
            .collect();

        let border_color = if ctx.is_focused(self.id()) {
            theme.border_focused
        } else {
            theme.border
        };

        let title = if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Minimal);
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  End:follow")
    }
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.log_debug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn buffer_with(n: usize) -> LogBuffer {
        let buffer = LogBuffer::new();
        for i in 0..n {
            buffer.add(LogEntry {
                timestamp: Utc::now(),
                level: LogLevel::Info,
                target: "blogscope".to_string(),
                message: format!("entry {}", i),
            });
        }
        buffer
    }

    #[test]
    fn follows_new_entries() {
        let buffer = buffer_with(10);
        let mut panel = LogsPanel::new();
        panel.sync(&buffer, 4);
        assert_eq!(panel.scroll_state().visible_range(), (6, 10));

        buffer.add(LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Warn,
            target: "blogscope".to_string(),
            message: "late".to_string(),
        });
        panel.sync(&buffer, 4);
        assert_eq!(panel.scroll_state().visible_range(), (7, 11));
    }

    #[test]
    fn scrolling_up_pins_the_view() {
        let buffer = buffer_with(10);
        let mut panel = LogsPanel::new();
        panel.sync(&buffer, 4);
        panel.scroll_up();

        let buffer = buffer_with(12);
        panel.sync(&buffer, 4);
        assert_eq!(panel.scroll_state().offset(), 5);
    }

    #[test]
    fn formats_level_and_message() {
        let entry = &buffer_with(1).get_all()[0];
        let line = format_log_entry(entry);
        assert!(line.ends_with("INFO  entry 0"));
    }
}
