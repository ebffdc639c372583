//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# blogscope configuration
# Precedence: environment variables > this file > built-in defaults

# Color theme: "dark", "light", "nord", "dracula"
# Env override: BLOGSCOPE_THEME
theme = "{theme}"

[feed]
# Posts shown when the feed becomes ready and after each search/tag change
initial_visible = {initial_visible}
# Posts added each time the last card scrolls into view
reveal_step = {reveal_step}
# Simulated loading delay (env override: BLOGSCOPE_LOADING_DELAY_MS)
loading_delay_ms = {loading_delay_ms}
# Fraction of the last card that must be visible to reveal more (0 < t <= 1)
visibility_threshold = {visibility_threshold:?}

[logging]
# trace, debug, info, warn, error (RUST_LOG takes precedence)
level = "{level}"
# Write JSON logs to rotating files in addition to the in-app log panel
file_enabled = {file_enabled}
file_dir = {file_dir:?}
# hourly, daily, never
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            theme = self.theme,
            initial_visible = self.feed.initial_visible,
            reveal_step = self.feed.reveal_step,
            loading_delay_ms = self.feed.loading_delay_ms,
            visibility_threshold = self.feed.visibility_threshold,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }
}
