// Title bar component
//
// Renders the app name, a spinner while the feed is loading, and the
// current search/tag summary once it is ready.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let state = app.feed.state();

    let indicator = if state.is_loading() {
        format!(" {} loading", app.spinner_char())
    } else {
        String::new()
    };

    let query = state.query();
    let summary = match (query.search_term.is_empty(), query.selected_tags.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!(" ──── \"{}\"", query.search_term),
        (true, false) => format!(" ──── {}", tag_list(query.selected_tags.iter())),
        (false, false) => format!(
            " ──── \"{}\" in {}",
            query.search_term,
            tag_list(query.selected_tags.iter())
        ),
    };

    let title = Paragraph::new(format!(" 📰 blogscope{}{}", indicator, summary))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}

fn tag_list<'a>(tags: impl Iterator<Item = &'a String>) -> String {
    tags.map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" ")
}
