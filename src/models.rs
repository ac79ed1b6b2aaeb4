//! Data models for feed entries and the articles built from them.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`RawEntry`]: An entry as yielded by a feed source, every field optional
//! - [`FetchedFeed`]: One source's worth of raw entries plus its display title
//! - [`Article`]: A normalized article after timestamp resolution
//! - [`Headline`]: The reduced `{id, title, source}` view handed to curation
//!
//! Articles flow source → recency window → staleness filter → cache; the
//! `id` field is only meaningful on articles returned from a fetch, where it
//! is dense `0..N-1` in newest-first order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder used when a feed entry carries no title.
pub const NO_TITLE: &str = "No title";

/// Maximum summary length, in characters, kept on an [`Article`].
///
/// Summaries are truncated at ingestion to bound memory and the payload
/// handed to the downstream curation step.
pub const SUMMARY_MAX_CHARS: usize = 500;

/// A single entry as produced by a feed source, before normalization.
///
/// Feeds are unreliable about which fields they populate, so everything is
/// optional here. The orchestrator resolves the gaps: missing titles become
/// [`NO_TITLE`], missing links become empty, and the timestamp falls back
/// `published` → `updated` → fetch time.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    /// The entry title, if the feed supplied one.
    pub title: Option<String>,
    /// The entry's primary link.
    pub link: Option<String>,
    /// The entry summary or description.
    pub summary: Option<String>,
    /// The publication timestamp, if present and parseable.
    pub published: Option<DateTime<Utc>>,
    /// The last-updated timestamp, if present and parseable.
    pub updated: Option<DateTime<Utc>>,
}

/// The result of fetching one feed source: its display title plus entries.
#[derive(Debug, Clone, Default)]
pub struct FetchedFeed {
    /// The feed-level title (e.g. "BBC News - World"); the feed URL is used
    /// as the article `source` when this is absent.
    pub title: Option<String>,
    /// The raw entries, in feed order.
    pub entries: Vec<RawEntry>,
}

/// A normalized news article.
///
/// Every `Article` returned from a fetch has survived both the caller's
/// recency window and the staleness filter, carries a resolved `published`
/// timestamp, and a summary of at most [`SUMMARY_MAX_CHARS`] characters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Article {
    /// Dense identifier within one fetch result set, `0..N-1` newest first.
    /// Assigned after all filtering; invalidated by the next fetch.
    pub id: usize,
    /// The article title, or [`NO_TITLE`].
    pub title: String,
    /// The article URL, empty when the feed supplied none.
    pub link: String,
    /// The originating feed's display name, or its URL as fallback.
    pub source: String,
    /// Resolved publication time. Entries without a parseable timestamp are
    /// stamped with the fetch time, so this is always present.
    pub published: DateTime<Utc>,
    /// Entry summary, truncated to [`SUMMARY_MAX_CHARS`] characters.
    pub summary: String,
}

/// The reduced projection of an [`Article`] for headline selection.
///
/// A downstream curation step picks from these by `id` and then retrieves
/// the full records it wants; it should never see full content up front.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Headline {
    /// The article's identifier in the most recent fetch result set.
    pub id: usize,
    /// The article title.
    pub title: String,
    /// The originating feed's display name.
    pub source: String,
}

impl Article {
    /// Project this article to its headline view.
    pub fn headline(&self) -> Headline {
        Headline {
            id: self.id,
            title: self.title.clone(),
            source: self.source.clone(),
        }
    }
}
