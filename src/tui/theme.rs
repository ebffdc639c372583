// Theme system for the TUI
//
// Provides color themes that can be switched at runtime with `t`.
// Each theme defines colors for all UI elements.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
    Dracula,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
            ThemeKind::Dracula,
        ]
    }

    /// Look up a theme by its config name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
            ThemeKind::Dracula => "Dracula",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Dracula => Theme::dracula(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,

    // Post cards
    pub card_border: Color,
    pub card_title: Color,
    pub card_excerpt: Color,
    pub card_author: Color,

    // Tag chips
    pub tag: Color,
    pub tag_selected_fg: Color,
    pub tag_selected_bg: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Yellow,

            card_border: Color::DarkGray,
            card_title: Color::White,
            card_excerpt: Color::Gray,
            card_author: Color::LightBlue,

            tag: Color::Blue,
            tag_selected_fg: Color::Black,
            tag_selected_bg: Color::Cyan,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            border_type: BorderType::Plain,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            highlight: Color::Rgb(184, 134, 11), // Dark goldenrod

            card_border: Color::Gray,
            card_title: Color::Black,
            card_excerpt: Color::DarkGray,
            card_author: Color::Blue,

            tag: Color::Rgb(30, 64, 175),
            tag_selected_fg: Color::White,
            tag_selected_bg: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Nord theme - arctic, north-bluish palette
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            muted: Color::Rgb(76, 86, 106),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208),
            border_type: BorderType::Rounded,

            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140),
            highlight: Color::Rgb(235, 203, 139),

            card_border: Color::Rgb(67, 76, 94),
            card_title: Color::Rgb(236, 239, 244),
            card_excerpt: Color::Rgb(216, 222, 233),
            card_author: Color::Rgb(129, 161, 193),

            tag: Color::Rgb(94, 129, 172),
            tag_selected_fg: Color::Rgb(46, 52, 64),
            tag_selected_bg: Color::Rgb(136, 192, 208),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            muted: Color::Rgb(98, 114, 164),
            border: Color::Rgb(98, 114, 164),
            border_focused: Color::Rgb(189, 147, 249),
            border_type: BorderType::Rounded,

            title: Color::Rgb(189, 147, 249),
            status_bar: Color::Rgb(80, 250, 123),
            highlight: Color::Rgb(241, 250, 140),

            card_border: Color::Rgb(68, 71, 90),
            card_title: Color::Rgb(248, 248, 242),
            card_excerpt: Color::Rgb(191, 191, 191),
            card_author: Color::Rgb(139, 233, 253),

            tag: Color::Rgb(255, 121, 198),
            tag_selected_fg: Color::Rgb(40, 42, 54),
            tag_selected_bg: Color::Rgb(255, 121, 198),

            log_error: Color::Rgb(255, 85, 85),
            log_warn: Color::Rgb(241, 250, 140),
            log_info: Color::Rgb(139, 233, 253),
            log_debug: Color::Rgb(98, 114, 164),
        }
    }
}
