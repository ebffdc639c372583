// blogscope - searchable, tag-filterable blog post previews
//
// Architecture:
// - Posts: the static catalog of post previews and tags
// - Filter: pure search/tag matching shared by the TUI and the CLI
// - Feed: reducer-driven state, loading timer and sentinel observer
// - TUI (ratatui): search bar, tag chips and infinitely scrolling cards
// - CLI (clap): headless search, tag listing and config management
// - Config/logging: TOML config file, tracing with TUI and file layers

mod cli;
mod config;
mod feed;
mod filter;
mod logging;
mod posts;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, VERSION};
use logging::{LogBuffer, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before loading so a broken file can still be
    // reset or edited
    if let Some(command @ Commands::Config { .. }) = cli.command {
        return cli::handle_config_command(command);
    }

    Config::ensure_config_exists();
    let config = Config::load()?;

    match cli.command {
        Some(command) => {
            // Headless: logs go to stderr so stdout stays pipeable
            let _file_guard = logging::init(&config.logging, LogSink::Stderr)?;
            report_config_warnings(&config);
            cli::run_query_command(command)
        }
        None => {
            // TUI: stdout would corrupt the alternate screen, capture instead
            let log_buffer = LogBuffer::new();
            let _file_guard = logging::init(&config.logging, LogSink::Tui(log_buffer.clone()))?;
            report_config_warnings(&config);

            tracing::info!("blogscope v{} starting", VERSION);
            tracing::info!(
                theme = %config.theme,
                loading_delay_ms = config.feed.loading_delay_ms,
                "Feed: initial {} posts, +{} per reveal",
                config.feed.initial_visible,
                config.feed.reveal_step
            );

            tui::run_tui(config, log_buffer).await
        }
    }
}

fn report_config_warnings(config: &Config) {
    for warning in &config.warnings {
        tracing::warn!("Config: {}", warning);
    }
}
