//! Feed configuration: reveal sizes, loading delay, visibility threshold

use serde::Deserialize;
use std::time::Duration;

/// How the feed loads and reveals posts
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    /// Posts shown once loading completes (and after each filter change)
    pub initial_visible: usize,
    /// Posts added each time the sentinel card scrolls into view
    pub reveal_step: usize,
    /// Simulated loading delay before the feed becomes ready
    pub loading_delay_ms: u64,
    /// Fraction of the sentinel card that must be on screen (0.0 < t <= 1.0)
    pub visibility_threshold: f32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            initial_visible: 2,
            reveal_step: 2,
            loading_delay_ms: 1500,
            visibility_threshold: 0.5,
        }
    }
}

/// Feed settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeed {
    pub initial_visible: Option<usize>,
    pub reveal_step: Option<usize>,
    pub loading_delay_ms: Option<u64>,
    pub visibility_threshold: Option<f32>,
}

impl FeedConfig {
    /// Create from file config with defaults, clamping out-of-range values
    pub fn from_file(file: Option<FileFeed>, warnings: &mut Vec<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let initial_visible = match file.initial_visible {
            Some(0) => {
                warnings.push("feed.initial_visible must be at least 1; using 1".to_string());
                1
            }
            Some(n) => n,
            None => defaults.initial_visible,
        };

        let reveal_step = match file.reveal_step {
            Some(0) => {
                warnings.push("feed.reveal_step must be at least 1; using 1".to_string());
                1
            }
            Some(n) => n,
            None => defaults.reveal_step,
        };

        let visibility_threshold = match file.visibility_threshold {
            Some(t) if t > 0.0 && t <= 1.0 => t,
            Some(t) => {
                warnings.push(format!(
                    "feed.visibility_threshold {} is outside (0, 1]; using {}",
                    t, defaults.visibility_threshold
                ));
                defaults.visibility_threshold
            }
            None => defaults.visibility_threshold,
        };

        Self {
            initial_visible,
            reveal_step,
            loading_delay_ms: file.loading_delay_ms.unwrap_or(defaults.loading_delay_ms),
            visibility_threshold,
        }
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}
