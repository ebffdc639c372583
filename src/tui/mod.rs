// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks, feed events)
// - Reporting sentinel visibility after each frame

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::feed::FeedEvent;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use clipboard::CopyFormat;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::{ComponentId, Handled, Scrollable};

/// Run the TUI until the user quits
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (mut app, mut feed_rx) = App::new(&config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app, &mut feed_rx).await;
    app.shutdown();

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with `tokio::select!`:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Feed events (the loading timer firing)
///
/// After each frame the sentinel's on-screen ratio is reported to the feed.
/// If that reveals more posts the loop redraws straight away, so a tall
/// terminal fills up without waiting for input.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    feed_rx: &mut mpsc::Receiver<FeedEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        if app.report_sentinel_visibility() {
            continue;
        }

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(feed_event) = feed_rx.recv() => {
                app.dispatch_feed(feed_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
///
/// Layered dispatch: quit → modal → loading → focus cycling →
/// search typing → global keys → focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: keys that work everywhere, even inside the search bar
    match key {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::F(10) => {
            app.should_quit = true;
            return;
        }
        KeyCode::F(1) if app.modal.is_none() => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            return;
        }
        _ => {}
    }

    // Layer 2: modal captures all input when active
    if handle_modal_input(app, key) {
        return;
    }

    // Layer 3: search, tags and results are not on screen until the feed
    // is ready, so only global keys apply
    if app.feed.state().is_loading() {
        handle_global_keys(app, key);
        return;
    }

    // Layer 4: focus cycling
    if matches!(key, KeyCode::Tab | KeyCode::BackTab) {
        if app.handle_key_press(key) {
            if key == KeyCode::BackTab || key_event.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev();
            } else {
                app.focus_next();
            }
        }
        return;
    }

    // Layer 5: the search bar takes every printable key, undebounced
    if app.focused == ComponentId::Search {
        if app.dispatch_to_focused(key_event) == Handled::No
            && matches!(key, KeyCode::Enter | KeyCode::Down | KeyCode::Esc)
        {
            app.focused = ComponentId::Results;
        }
        return;
    }

    // Layer 6: global keys
    if handle_global_keys(app, key) {
        return;
    }

    // Layer 7: focused component
    if !app.handle_key_press(key) {
        return;
    }
    if app.dispatch_to_focused(key_event) == Handled::No
        && app.focused == ComponentId::Tags
        && key == KeyCode::Char('c')
    {
        app.clear_tags();
    }
}

/// Handle mouse input
///
/// The wheel always scrolls the results, whichever component has focus.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.results_panel.scroll_up(),
        MouseEventKind::ScrollDown => app.results_panel.scroll_down(),
        _ => {}
    }
}

/// Handle modal input - returns true if a modal absorbed the key
fn handle_modal_input(app: &mut App, key: KeyCode) -> bool {
    let Some(modal) = app.modal.as_mut() else {
        return false;
    };

    match modal.handle_input(key) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
    }
    true
}

/// Handle global keys - returns true if the key is a global binding
///
/// Never reached while the ready feed's search bar has focus, so letters
/// stay typeable.
fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    let action: fn(&mut App) = match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => |app| app.should_quit = true,
        KeyCode::Char('?') => |app| app.modal = Some(Modal::help()),
        KeyCode::Char('t') => App::next_theme,
        KeyCode::Char('L') => App::toggle_logs,
        KeyCode::Char('y') => |app| app.copy_top_post(CopyFormat::Text),
        KeyCode::Char('Y') => |app| app.copy_top_post(CopyFormat::Json),
        _ => return false,
    };

    if app.handle_key_press(key) {
        action(app);
    }
    true
}
