//! Configuration: the feed list and the staleness policy.
//!
//! Configuration is a YAML file with full defaults, so an empty file (or no
//! file at all) yields the built-in feed list and the default filter:
//!
//! ```yaml
//! feeds:
//!   - https://feeds.bbci.co.uk/news/world/rss.xml
//! filter:
//!   enabled: true
//!   max_age_hours: 24
//!   stale_patterns: ["\\b2022\\b", "\\b2023\\b", "\\b2024\\b"]
//! ```
//!
//! Invalid configuration (unparseable YAML, malformed feed URL, bad regex)
//! is the one error class that propagates out of this crate; everything at
//! fetch time degrades per source instead.

use std::error::Error;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::filter::{DEFAULT_MAX_AGE_HOURS, DEFAULT_STALE_YEAR_PATTERNS, StaleFilter};

/// Feed sources used when no config file and no CLI override is given.
pub const DEFAULT_FEEDS: [&str; 4] = [
    "https://feeds.bbci.co.uk/news/world/rss.xml",
    "https://feeds.npr.org/1001/rss.xml",
    "https://www.aljazeera.com/xml/rss/all.xml",
    "https://www.theguardian.com/world/rss",
];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Feed URLs to pull from, in fetch order.
    #[serde(default = "default_feeds")]
    pub feeds: Vec<String>,
    /// Staleness filter policy.
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Staleness filter policy as it appears in the config file.
///
/// Patterns live here as strings and are compiled once into a
/// [`StaleFilter`]; keeping the denylist in configuration (rather than as
/// literals in filter logic) is what lets it be maintained as calendar
/// years advance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_max_age_hours")]
    pub max_age_hours: i64,
    #[serde(default = "default_stale_patterns")]
    pub stale_patterns: Vec<String>,
}

fn default_feeds() -> Vec<String> {
    DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect()
}

fn default_enabled() -> bool {
    true
}

fn default_max_age_hours() -> i64 {
    DEFAULT_MAX_AGE_HOURS
}

fn default_stale_patterns() -> Vec<String> {
    DEFAULT_STALE_YEAR_PATTERNS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feeds: default_feeds(),
            filter: FilterConfig::default(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_age_hours: default_max_age_hours(),
            stale_patterns: default_stale_patterns(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config file {path}: {e}"))?;
        let config: Config = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed feed URLs and uncompilable denylist patterns.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        for feed in &self.feeds {
            Url::parse(feed).map_err(|e| format!("invalid feed URL '{feed}': {e}"))?;
        }
        self.stale_filter()?;
        Ok(())
    }

    /// Compile this configuration's filter policy.
    pub fn stale_filter(&self) -> Result<StaleFilter, Box<dyn Error>> {
        let mut patterns = Vec::with_capacity(self.filter.stale_patterns.len());
        for pattern in &self.filter.stale_patterns {
            let compiled = Regex::new(pattern)
                .map_err(|e| format!("invalid stale pattern '{pattern}': {e}"))?;
            patterns.push(compiled);
        }
        Ok(StaleFilter {
            enabled: self.filter.enabled,
            max_age_hours: self.filter.max_age_hours,
            stale_patterns: patterns,
        })
    }
}
