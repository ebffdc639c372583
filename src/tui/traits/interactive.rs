//! Interactive trait for components that handle keyboard input
//!
//! The App routes input to the focused component.

use super::Component;
use crate::feed::FeedEvent;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Components never touch the feed directly. A component that wants to
/// change the query hands the event back and App dispatches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
    /// Event was consumed and produced a feed event for App to dispatch
    Dispatch(FeedEvent),
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (quit keys, modal, focus cycling, globals)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
///    │
///    │ returns Handled::Yes / No / Dispatch(event)
///    ▼
/// App (fallback handlers, feed dispatch)
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Hint text for status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
