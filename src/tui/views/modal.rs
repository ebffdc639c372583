// Modal overlay rendering
//
// Modals are drawn centered on top of the main content.

use crate::config::VERSION;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.tag);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    // "    key         description"
    let kb = |key: &'static str, desc: &'static str| -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc, desc_style),
        ])
    };
    let header = |title: &'static str| Line::from(Span::styled(title, header_style));

    let content = Text::from(vec![
        Line::raw(""),
        header("  Keyboard"),
        kb("Tab", "Next panel"),
        kb("Shift+Tab", "Previous panel"),
        Line::raw(""),
        header("  Search"),
        kb("type", "Filter by title, excerpt, author"),
        kb("Ctrl+U", "Clear search"),
        kb("Enter/↓", "Go to results"),
        Line::raw(""),
        header("  Tags"),
        kb("←/→, h/l", "Move between tags"),
        kb("Enter/Space", "Toggle tag"),
        kb("c", "Clear selected tags"),
        Line::raw(""),
        header("  Results"),
        kb("↑/↓, j/k", "Scroll (more posts load)"),
        kb("PgUp/PgDn", "Scroll a page"),
        kb("Home/End", "Jump to start/end"),
        kb("y / Y", "Copy top post (text/JSON)"),
        Line::raw(""),
        header("  General"),
        kb("t", "Cycle theme"),
        kb("L", "Toggle system logs"),
        kb("?, F1", "Toggle this help"),
        kb("q, F10", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            Style::default().fg(theme.border),
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme_kind.name(), key_style),
            Span::styled(format!("  |  v{}", VERSION), desc_style),
        ]),
    ]);

    let height = content.height() as u16 + 2;
    let area = centered_rect(48, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
