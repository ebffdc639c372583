//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.

use crate::feed::FeedState;
use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Focusable components, in Tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Search input (default focus)
    #[default]
    Search,
    /// Tag filter chips
    Tags,
    /// Post cards
    Results,
    /// System logs panel (only focusable while shown)
    Logs,
}

impl ComponentId {
    /// Cycle to next focusable component (Tab behavior)
    pub fn next_focus(self, logs_shown: bool) -> Self {
        match self {
            Self::Search => Self::Tags,
            Self::Tags => Self::Results,
            Self::Results if logs_shown => Self::Logs,
            Self::Results | Self::Logs => Self::Search,
        }
    }

    /// Cycle to previous focusable component (Shift+Tab behavior)
    pub fn prev_focus(self, logs_shown: bool) -> Self {
        match self {
            Self::Search if logs_shown => Self::Logs,
            Self::Search => Self::Results,
            Self::Tags => Self::Search,
            Self::Results => Self::Tags,
            Self::Logs => Self::Results,
        }
    }

    /// Label for the status bar
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Tags => "Tags",
            Self::Results => "Results",
            Self::Logs => "Logs",
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need; rendering never mutates app state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for spinners)
    pub animation_frame: usize,

    /// Current feed state (query, visible posts)
    pub feed: &'a FeedState,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        theme: &'a Theme,
        focus: ComponentId,
        animation_frame: usize,
        feed: &'a FeedState,
    ) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
            feed,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all focusable UI components
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
