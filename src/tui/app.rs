// TUI application state
//
// App owns the feed controller and the components that render it. Input is
// routed here from the event loop; components hand feed events back through
// `Handled::Dispatch` and App runs them through the controller.

use super::clipboard::{self, CopyFormat};
use super::components::{LogsPanel, ResultsPanel, SearchBar, TagBar, Toast};
use super::input::InputHandler;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use super::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crate::config::Config;
use crate::feed::{FeedController, FeedEvent};
use crate::logging::LogBuffer;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;
use tokio::sync::mpsc;

/// Main application state for the TUI
pub struct App {
    /// Feed state plus its timer and sentinel observer
    pub feed: FeedController,

    /// Which component receives keys
    pub focused: ComponentId,

    // Components
    pub search_bar: SearchBar,
    pub tag_bar: TagBar,
    pub results_panel: ResultsPanel,
    pub logs_panel: LogsPanel,

    /// Whether the system logs panel is visible
    pub show_logs: bool,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Active overlay (captures all input while open)
    pub modal: Option<Modal>,

    /// Transient notification
    pub toast: Option<Toast>,

    /// Shared with the TUI log layer
    pub log_buffer: LogBuffer,

    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Advances every tick; drives spinners
    pub animation_frame: usize,

    input_handler: InputHandler,
}

impl App {
    /// Build the app and start the feed.
    ///
    /// Returns the receiver the event loop selects on for feed events.
    pub fn new(config: &Config, log_buffer: LogBuffer) -> (Self, mpsc::Receiver<FeedEvent>) {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, using dark");
            ThemeKind::default()
        });
        let (feed, feed_rx) = FeedController::start(&config.feed);

        let app = Self {
            feed,
            focused: ComponentId::default(),
            search_bar: SearchBar::new(),
            tag_bar: TagBar::new(),
            results_panel: ResultsPanel::new(),
            logs_panel: LogsPanel::new(),
            show_logs: false,
            theme_kind,
            theme: theme_kind.theme(),
            modal: None,
            toast: None,
            log_buffer,
            should_quit: false,
            start_time: Instant::now(),
            animation_frame: 0,
            input_handler: InputHandler::with_default_config(),
        };
        (app, feed_rx)
    }

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        self.render_context().spinner_char()
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(
            &self.theme,
            self.focused,
            self.animation_frame,
            self.feed.state(),
        )
    }

    /// Uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next_focus(self.show_logs);
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev_focus(self.show_logs);
    }

    /// Key hints for the focused component
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused {
            ComponentId::Search => self.search_bar.focus_hint(),
            ComponentId::Tags => self.tag_bar.focus_hint(),
            ComponentId::Results => self.results_panel.focus_hint(),
            ComponentId::Logs => self.logs_panel.focus_hint(),
        }
    }

    /// Returns true if the press should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Run a feed event through the controller.
    ///
    /// A changed query starts the results list over from the top.
    pub fn dispatch_feed(&mut self, event: FeedEvent) {
        let query_before = self.feed.state().query().clone();
        self.feed.dispatch(event);
        if *self.feed.state().query() != query_before {
            self.results_panel.reset();
        }
    }

    /// Route a key to the focused component and dispatch whatever it hands back
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        let handled = match self.focused {
            ComponentId::Search => self.search_bar.handle_key(key),
            ComponentId::Tags => self.tag_bar.handle_key(key),
            ComponentId::Results => self.results_panel.handle_key(key),
            ComponentId::Logs => self.logs_panel.handle_key(key),
        };
        if let Handled::Dispatch(event) = &handled {
            self.dispatch_feed(event.clone());
        }
        handled
    }

    /// Deselect every selected tag, one toggle per tag
    pub fn clear_tags(&mut self) {
        let selected: Vec<String> = self
            .feed
            .state()
            .query()
            .selected_tags
            .iter()
            .cloned()
            .collect();
        for tag in selected {
            self.dispatch_feed(FeedEvent::TagToggled(tag));
        }
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focused == ComponentId::Logs {
            self.focused = ComponentId::Results;
        }
    }

    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.show_toast(format!("Theme: {}", self.theme_kind.name()));
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Copy the topmost card on screen to the clipboard
    pub fn copy_top_post(&mut self, format: CopyFormat) {
        let state = self.feed.state();
        let top = if state.is_loading() {
            None
        } else {
            self.results_panel.top_card(state.visible_count())
        };
        let Some(index) = top else {
            self.show_toast("Nothing to copy");
            return;
        };
        let Some(post) = state.visible_posts().nth(index) else {
            return;
        };

        let copied = format
            .render(post)
            .and_then(|text| clipboard::copy_to_clipboard(&text));
        match copied {
            Ok(()) => {
                tracing::debug!(post = post.id, format = format.label(), "Copied post");
                self.show_toast(format!("✓ Copied {} to clipboard", format.label()));
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    /// Report how much of the sentinel card the last frame showed.
    ///
    /// Called after every draw. Returns true if more posts were revealed,
    /// in which case the caller redraws right away.
    pub fn report_sentinel_visibility(&mut self) -> bool {
        let state = self.feed.state();
        let Some(sentinel) = state.sentinel() else {
            return false;
        };
        let Some(index) = state.visible_count().checked_sub(1) else {
            return false;
        };
        let ratio = self.results_panel.visibility_of(index);
        self.feed.report_visibility(sentinel, ratio)
    }

    /// Release the feed's timer and observer before the terminal is restored
    pub fn shutdown(&mut self) {
        self.feed.teardown();
    }

    /// Render a focusable component with the shared context
    pub fn render_component(&self, f: &mut Frame, area: Rect, id: ComponentId) {
        let ctx = self.render_context();
        match id {
            ComponentId::Search => self.search_bar.render(f, area, &ctx),
            ComponentId::Tags => self.tag_bar.render(f, area, &ctx),
            ComponentId::Results => self.results_panel.render(f, area, &ctx),
            ComponentId::Logs => self.logs_panel.render(f, area, &ctx),
        }
    }
}
