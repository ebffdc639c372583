//! Component trait system for TUI architecture
//!
//! Components declare their own capabilities through traits instead of
//! App knowing how to render and scroll every panel.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │  (orchestrator: routes input, owns the feed controller)     │
//! └─────────────────────────────────────────────────────────────┘
//!              │               │               │               │
//!              ▼               ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │  Search  │   │   Tags   │   │ Results  │   │   Logs   │
//!        │   Bar    │   │   Bar    │   │  Panel   │   │  Panel   │
//!        └──────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Scrollable`] - components with scrollable content
//! - [`Interactive`] - components that handle keyboard input; may hand a
//!   [`FeedEvent`](crate::feed::FeedEvent) back to App for dispatch

mod component;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
pub use scrollable::Scrollable;
