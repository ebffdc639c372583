// Status bar component
//
// Renders feed statistics at the bottom: visible vs matching posts,
// selected tags, focus, uptime, plus key hints for the focused component.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: counts, focus, key hints and uptime
/// - Narrow: counts and uptime only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let status_text = status_text(app, bp);

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

fn status_text(app: &App, bp: Breakpoint) -> String {
    let state = app.feed.state();

    if state.is_loading() {
        return format!(" {} │ Loading posts…", app.uptime());
    }

    let counts = format!(
        "Showing {} of {}",
        state.visible_count(),
        state.filtered_count()
    );
    let tags = match state.query().selected_tags.len() {
        0 => "no tags".to_string(),
        1 => "1 tag".to_string(),
        n => format!("{} tags", n),
    };

    if !bp.at_least(Breakpoint::Normal) {
        return format!(" {} │ {} │ {}", counts, tags, app.uptime());
    }

    let hint = app.focus_hint().unwrap_or("");
    if bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ {} │ ⏱ {} │ [{}] {} │ ?:help q:quit",
            counts,
            tags,
            app.uptime(),
            app.focused.name(),
            hint
        )
    } else {
        format!(
            " {} │ {} │ ⏱ {} │ [{}]",
            counts,
            tags,
            app.uptime(),
            app.focused.name()
        )
    }
}
