// Key repeat and debounce
//
// Two behaviors:
// - StateChange: trigger once per press (Tab, Enter, q, t, y...)
// - Repeatable: trigger on press, then repeat while held (arrows, paging)
//
// Most terminals never send Release events, so a StateChange key held
// down (or pressed again quickly) is debounced by time instead. Text typed
// into the search bar bypasses this handler entirely; debouncing there
// would eat repeated letters.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a StateChange key without a release
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    StateChange,
    Repeatable {
        /// Delay before starting to repeat
        initial_delay: Duration,
        /// Time between repeats
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Arrow keys and vim motions
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(50),
        }
    }

    /// PageUp/PageDown
    pub fn fast_navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn press(&mut self, now: Instant) {
        self.is_pressed = true;
        self.press_started = Some(now);
        self.last_triggered = Some(now);
    }

    fn release(&mut self) {
        *self = Self::default();
    }
}

pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the press should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);
        let state = self.key_states.entry(key).or_default();

        if !state.is_pressed {
            state.press(now);
            return true;
        }

        let (Some(press_start), Some(last)) = (state.press_started, state.last_triggered) else {
            state.press(now);
            return true;
        };

        let due = match behavior {
            KeyBehavior::StateChange => now.duration_since(last) >= STATE_CHANGE_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(press_start) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };
        if due {
            state.last_triggered = Some(now);
        }
        due
    }

    /// Key behaviors for blogscope
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::Char('h'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::navigation(),
        );

        handler.configure_keys(
            &[KeyCode::PageUp, KeyCode::PageDown],
            KeyBehavior::fast_navigation(),
        );

        // Everything else (Tab, Enter, Space, Home, End, q, t, L, y, Y, c, ?)
        // falls back to StateChange
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
