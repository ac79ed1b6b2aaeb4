//! Command-line interface definitions for freshwire.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

use crate::fetcher::{DEFAULT_LIMIT, DEFAULT_RECENCY_HOURS};

/// Command-line arguments for the freshwire binary.
///
/// # Examples
///
/// ```sh
/// # Fetch full records from the default feeds
/// freshwire
///
/// # Headline triples from the last 12 hours, custom config
/// freshwire --headlines --hours 12 --config freshwire.yaml
///
/// # Override the feed list entirely
/// freshwire --feed https://example.com/rss --feed https://other.example/atom
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file (feeds + filter policy)
    #[arg(short, long, env = "FRESHWIRE_CONFIG")]
    pub config: Option<String>,

    /// Recency window in hours
    #[arg(long, default_value_t = DEFAULT_RECENCY_HOURS)]
    pub hours: i64,

    /// Maximum number of articles to return
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Print only {id, title, source} headline triples
    #[arg(long)]
    pub headlines: bool,

    /// Feed URL overriding the configured list (repeatable)
    #[arg(long = "feed", value_name = "URL")]
    pub feeds: Vec<String>,

    /// Disable the staleness filter (NOT recommended; stale news may leak)
    #[arg(long)]
    pub no_stale_filter: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["freshwire"]);
        assert_eq!(cli.hours, 8);
        assert_eq!(cli.limit, 50);
        assert!(!cli.headlines);
        assert!(!cli.no_stale_filter);
        assert!(cli.feeds.is_empty());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "freshwire",
            "--headlines",
            "--hours",
            "12",
            "--limit",
            "20",
            "--config",
            "./freshwire.yaml",
        ]);

        assert!(cli.headlines);
        assert_eq!(cli.hours, 12);
        assert_eq!(cli.limit, 20);
        assert_eq!(cli.config.as_deref(), Some("./freshwire.yaml"));
    }

    #[test]
    fn test_cli_repeatable_feeds() {
        let cli = Cli::parse_from([
            "freshwire",
            "--feed",
            "https://a.test/rss",
            "--feed",
            "https://b.test/rss",
        ]);

        assert_eq!(cli.feeds.len(), 2);
        assert_eq!(cli.feeds[0], "https://a.test/rss");
    }
}
