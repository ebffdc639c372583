//! Post feed: search, tag filtering and scroll-triggered reveal
//!
//! - [`state`] - explicit feed state and the pure [`state::reduce`] function
//! - [`event`] - events the reducer understands
//! - [`observer`] - turns sentinel visibility measurements into events
//! - [`timer`] - cancellable one-shot loading delay
//! - [`controller`] - wires state, observer and timer together

mod controller;
mod event;
mod observer;
mod state;
mod timer;

pub use controller::FeedController;
pub use event::FeedEvent;
pub use state::FeedState;

#[cfg(test)]
pub use state::{reduce, Phase};
