// Views module - screen-level rendering logic
//
// One screen, stacked top to bottom:
// title │ search │ tags │ results │ logs (optional) │ status
//
// While the feed is loading, a spinner replaces everything between the
// title and the status bar. Modal and toast overlays are drawn last.

mod modal;

use super::app::App;
use super::layout::logs_panel_height;
use super::traits::ComponentId;
use crate::tui::components::{status_bar, title_bar};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

const TITLE_HEIGHT: u16 = 3;
const SEARCH_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 2;
/// Results panel keeps at least a bordered row
const RESULTS_MIN_HEIGHT: u16 = 3;

/// Main UI render function - called on every frame
///
/// Syncs panel dimensions with the feed before rendering, so the
/// visibility report that follows the frame sees this frame's geometry.
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let shell = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(f.area());

    title_bar::render(f, shell[0], app);

    if app.feed.state().is_loading() {
        render_loading(f, shell[1], app);
    } else {
        render_feed(f, shell[1], app);
    }

    status_bar::render(f, shell[2], app);

    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y, area.width, area.height.min(1));
    let spinner = Paragraph::new(format!("{} Loading posts…", app.spinner_char()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.muted));
    f.render_widget(spinner, line_area);
}

fn render_feed(f: &mut Frame, area: Rect, app: &mut App) {
    let tags_height = app.tag_bar.height_for(area.width);
    let mut constraints = vec![
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Length(tags_height),
        Constraint::Min(RESULTS_MIN_HEIGHT),
    ];
    if app.show_logs {
        constraints.push(Constraint::Length(logs_panel_height(f.area().height)));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // Sync before render; both panels size their scroll to the inner area
    let results_inner = chunks[2].height.saturating_sub(2) as usize;
    let visible = app.feed.state().visible_count();
    app.results_panel.sync(visible, results_inner);
    if app.show_logs {
        let logs_inner = chunks[3].height.saturating_sub(2) as usize;
        app.logs_panel.sync(&app.log_buffer, logs_inner);
    }

    app.render_component(f, chunks[0], ComponentId::Search);
    app.render_component(f, chunks[1], ComponentId::Tags);
    app.render_component(f, chunks[2], ComponentId::Results);
    if app.show_logs {
        app.render_component(f, chunks[3], ComponentId::Logs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, FeedConfig};
    use crate::feed::FeedEvent;
    use crate::logging::LogBuffer;
    use crate::tui::modal::Modal;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::Receiver<FeedEvent>) {
        let config = Config {
            feed: FeedConfig {
                loading_delay_ms: 10_000,
                ..FeedConfig::default()
            },
            ..Config::default()
        };
        App::new(&config, LogBuffer::new())
    }

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn loading_screen_hides_the_feed() {
        let (mut app, _rx) = app();
        let text = screen(&mut app, 90, 30);
        assert!(text.contains("Loading posts…"));
        assert!(!text.contains("Introduction to React Hooks"));
        assert!(!text.contains("Search blogs"));
    }

    #[tokio::test]
    async fn ready_screen_shows_search_tags_and_cards() {
        let (mut app, _rx) = app();
        app.dispatch_feed(FeedEvent::LoadingElapsed);
        let text = screen(&mut app, 100, 30);
        assert!(text.contains("Search blogs, authors, topics..."));
        assert!(text.contains("#react"));
        assert!(text.contains("Introduction to React Hooks"));
        assert!(text.contains("Showing 2 of 4"));
    }

    #[tokio::test]
    async fn tall_terminal_reveals_everything_after_frames() {
        let (mut app, _rx) = app();
        app.dispatch_feed(FeedEvent::LoadingElapsed);

        // Same draw/report cycle as the event loop
        let mut terminal = Terminal::new(TestBackend::new(100, 60)).unwrap();
        for _ in 0..4 {
            terminal.draw(|f| draw(f, &mut app)).unwrap();
            if !app.report_sentinel_visibility() {
                break;
            }
        }
        assert_eq!(app.feed.state().visible_count(), 4);
    }

    #[tokio::test]
    async fn no_match_screen() {
        let (mut app, _rx) = app();
        app.dispatch_feed(FeedEvent::LoadingElapsed);
        app.dispatch_feed(FeedEvent::SearchChanged("zzz-no-match".into()));
        let text = screen(&mut app, 90, 30);
        assert!(text.contains("No results found"));
        assert!(text.contains("Showing 0 of 0"));
    }

    #[tokio::test]
    async fn help_overlay_and_logs_panel() {
        let (mut app, _rx) = app();
        app.dispatch_feed(FeedEvent::LoadingElapsed);
        app.toggle_logs();
        app.modal = Some(Modal::help());
        let text = screen(&mut app, 100, 50);
        assert!(text.contains("System Logs"));
        assert!(text.contains("Keyboard"));
        assert_eq!(app.modal, Some(Modal::Help));
    }
}
