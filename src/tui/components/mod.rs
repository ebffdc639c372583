// Components module - reusable UI building blocks
//
// Shell components are rendered around the feed:
// - Title bar: app name, loading spinner, query summary
// - Status bar: visible/matching counts, tags, uptime, key hints
// - Logs panel: system log entries (toggle with L)
//
// Feed components take input through the Interactive trait:
// - Search bar, tag bar, results panel

pub mod logs_panel;
pub mod results_panel;
pub mod scrollbar;
pub mod search_bar;
pub mod status_bar;
pub mod tag_bar;
pub mod title_bar;
pub mod toast;

pub use logs_panel::LogsPanel;
pub use results_panel::ResultsPanel;
pub use search_bar::SearchBar;
pub use tag_bar::TagBar;
pub use toast::Toast;
