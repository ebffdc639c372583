//! Clipboard helper for copying post text to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard is created
//! fresh each time so no handle is held between copies.

use crate::posts::Post;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// What to put on the clipboard for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    /// Title, excerpt, tags and author as plain lines
    Text,
    /// The post serialized as JSON
    Json,
}

impl CopyFormat {
    /// Clipboard payload for `post`
    pub fn render(self, post: &Post) -> Result<String> {
        match self {
            CopyFormat::Text => Ok(post.to_plain_text()),
            CopyFormat::Json => serde_json::to_string(post).context("Failed to encode post"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CopyFormat::Text => "text",
            CopyFormat::Json => "JSON",
        }
    }
}

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts;

    #[test]
    fn text_payload_has_author_line() {
        let text = CopyFormat::Text.render(&posts::all()[2]).unwrap();
        assert!(text.starts_with("Advanced JavaScript Techniques\n"));
        assert!(text.ends_with("By Alice Johnson"));
    }

    #[test]
    fn json_payload_round_trips_fields() {
        let json = CopyFormat::Json.render(&posts::all()[3]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["title"], "Web Performance Optimization");
    }
}
