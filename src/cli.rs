// CLI module - command-line argument parsing and handlers
//
// With no subcommand blogscope starts the TUI. Subcommands run headless:
// - search: filter posts and print the matches
// - tags: list available tags
// - config: show, locate, reset or edit the config file

use crate::config::{Config, VERSION};
use crate::filter::{filter_posts, FilterQuery};
use crate::posts::{self, Post};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::process::Command;

/// blogscope - search and browse blog post previews
#[derive(Parser)]
#[command(name = "blogscope")]
#[command(version = VERSION)]
#[command(about = "Searchable, tag-filterable blog post previews in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print posts matching a search term and tags
    Search {
        /// Case-insensitive text matched against title, excerpt and author
        term: Option<String>,

        /// Only posts carrying at least one of these tags (repeatable)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,

        /// Print at most N matches
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// List available tags
    Tags,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Run a headless `search` or `tags` command
pub fn run_query_command(command: Commands) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Search {
            term,
            tags,
            json,
            limit,
        } => {
            let query = build_query(term, &tags);
            let mut matches = filter_posts(posts::all(), &query);
            tracing::debug!(
                term = %query.search_term,
                tags = query.selected_tags.len(),
                matches = matches.len(),
                "Search"
            );
            if let Some(limit) = limit {
                matches.truncate(limit);
            }
            write_search_results(&mut out, &matches, json)
        }
        Commands::Tags => write_tags(&mut out),
        Commands::Config { .. } => handle_config_command(command),
    }
}

/// Build a query from CLI arguments; unknown tags are reported and kept
fn build_query(term: Option<String>, tags: &[String]) -> FilterQuery {
    let known = posts::available_tags();
    let mut query = FilterQuery::new(term.unwrap_or_default());
    for tag in tags {
        if !known.contains(&tag.as_str()) {
            tracing::warn!(tag = %tag, "Unknown tag; it matches no posts");
        }
        query = query.with_tag(tag.as_str());
    }
    query
}

pub fn write_search_results(out: &mut impl Write, matches: &[&Post], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, matches).context("Failed to encode posts")?;
        writeln!(out)?;
        return Ok(());
    }

    if matches.is_empty() {
        writeln!(out, "No results found")?;
        return Ok(());
    }

    for (i, post) in matches.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", post.to_plain_text())?;
    }
    Ok(())
}

pub fn write_tags(out: &mut impl Write) -> Result<()> {
    for tag in posts::available_tags() {
        writeln!(out, "{}", tag)?;
    }
    Ok(())
}

/// Handle `config` flags. Runs before the config file is loaded so a
/// broken file can still be located, edited or reset.
pub fn handle_config_command(command: Commands) -> Result<()> {
    let Commands::Config {
        show,
        reset,
        edit,
        path,
    } = command
    else {
        return Ok(());
    };

    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else if edit {
        handle_config_edit()
    } else {
        // No flag provided, show help
        println!("Usage: blogscope config [--show|--reset|--edit|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn require_config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path (no home directory)")
}

fn handle_config_path() -> Result<()> {
    println!("{}", require_config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    for warning in &config.warnings {
        println!("# warning: {}", warning);
    }

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = require_config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        if !confirm(std::io::stdin().lock())? {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

/// Read one line and accept only "y" / "Y"
fn confirm(mut input: impl BufRead) -> Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn handle_config_edit() -> Result<()> {
    let path = require_config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}'; set $EDITOR to your preferred editor",
            editor
        )
    })?;

    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(matches: &[&Post], json: bool) -> String {
        let mut buf = Vec::new();
        write_search_results(&mut buf, matches, json).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn parses_search_with_tags() {
        let cli = Cli::try_parse_from([
            "blogscope",
            "search",
            "react",
            "--tag",
            "javascript",
            "-t",
            "css",
            "--limit",
            "1",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Search {
                term, tags, limit, ..
            }) => {
                assert_eq!(term.as_deref(), Some("react"));
                assert_eq!(tags, vec!["javascript", "css"]);
                assert_eq!(limit, Some(1));
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["blogscope"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn empty_result_prints_no_results() {
        let query = build_query(Some("zzz-no-match".into()), &[]);
        let matches = filter_posts(posts::all(), &query);
        assert_eq!(render(&matches, false), "No results found\n");
    }

    #[test]
    fn text_output_lists_posts_in_order() {
        let query = build_query(None, &["javascript".to_string()]);
        let matches = filter_posts(posts::all(), &query);
        let text = render(&matches, false);

        let first = text.find("Introduction to React Hooks").unwrap();
        let second = text.find("Advanced JavaScript Techniques").unwrap();
        assert!(first < second);
        assert!(text.contains("By Alice Johnson"));
    }

    #[test]
    fn json_output_is_an_array() {
        let query = build_query(Some("tailwind".into()), &[]);
        let matches = filter_posts(posts::all(), &query);
        let value: serde_json::Value = serde_json::from_str(&render(&matches, true)).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(1));
        assert_eq!(value[0]["author"], "John Smith");
    }

    #[test]
    fn tags_are_listed_first_seen() {
        let mut buf = Vec::new();
        write_tags(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().next(), Some("react"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn confirm_accepts_only_yes() {
        assert!(confirm("y\n".as_bytes()).unwrap());
        assert!(confirm("Y\n".as_bytes()).unwrap());
        assert!(!confirm("\n".as_bytes()).unwrap());
        assert!(!confirm("yes\n".as_bytes()).unwrap());
    }
}
