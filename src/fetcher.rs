//! The fetch orchestrator.
//!
//! [`NewsFetcher`] produces a fresh, bounded, id-addressable set of articles
//! from all configured feed sources. One fetch pass walks the sources in
//! order, resolves each entry's timestamp, applies the caller's recency
//! window, aggregates and sorts newest-first, runs the [`StaleFilter`] at
//! its own fixed ceiling, truncates, assigns dense ids, and swaps in a new
//! id → record cache for later detail lookup.
//!
//! A failing source is logged and contributes nothing; it never aborts the
//! pass. Sources are awaited one at a time, so total latency is the sum of
//! per-source latencies.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info, warn};

use crate::filter::StaleFilter;
use crate::models::{Article, FetchedFeed, Headline, NO_TITLE, RawEntry, SUMMARY_MAX_CHARS};
use crate::sources::FetchEntries;
use crate::utils::truncate_chars;

/// Default recency window handed to `fetch_recent`.
pub const DEFAULT_RECENCY_HOURS: i64 = 8;

/// Default cap on the number of articles returned per fetch.
pub const DEFAULT_LIMIT: usize = 50;

/// Orchestrates fetching, filtering, and caching across feed sources.
///
/// Owns its cache exclusively; it is not safe for concurrent mutation.
/// Callers needing concurrency serialize access externally or hold one
/// fetcher per context.
pub struct NewsFetcher<F: FetchEntries> {
    feeds: Vec<String>,
    transport: F,
    filter: StaleFilter,
    cache: HashMap<usize, Article>,
}

impl<F: FetchEntries> NewsFetcher<F> {
    /// Build a fetcher over `feeds`, fetching through `transport`.
    pub fn new(feeds: Vec<String>, transport: F, filter: StaleFilter) -> Self {
        Self {
            feeds,
            transport,
            filter,
            cache: HashMap::new(),
        }
    }

    /// The staleness policy this fetcher runs with.
    pub fn filter(&self) -> &StaleFilter {
        &self.filter
    }

    /// Fetch articles newer than `hours` from all sources, newest first.
    ///
    /// The [`StaleFilter`]'s own age ceiling is applied after the recency
    /// window, so passing a wide window never readmits stale articles. The
    /// returned records carry ids `0..len-1` in result order, and the same
    /// records replace the detail cache wholesale; ids from any previous
    /// fetch are invalid afterwards.
    pub async fn fetch_recent(&mut self, hours: i64, limit: usize) -> Vec<Article> {
        let now = Utc::now();
        let cutoff = now - Duration::hours(hours);
        let mut all_articles: Vec<Article> = Vec::new();

        for feed_url in &self.feeds {
            info!(url = %feed_url, "Fetching feed");
            let fetched = match self.transport.fetch_entries(feed_url).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    error!(url = %feed_url, error = %e, "Feed fetch failed; skipping source");
                    continue;
                }
            };

            let kept = collect_recent(&fetched, feed_url, cutoff, now, &mut all_articles);
            debug!(url = %feed_url, kept, "Kept recent entries from feed");
        }

        // Newest first; stable, so equal timestamps keep aggregation order.
        all_articles.sort_by(|a, b| b.published.cmp(&a.published));

        // Re-applied unconditionally so the filter's ceiling holds no matter
        // how wide a window the caller asked for.
        let mut fresh = self.filter.apply_at(all_articles, now);
        fresh.truncate(limit);

        let mut cache = HashMap::with_capacity(fresh.len());
        for (i, article) in fresh.iter_mut().enumerate() {
            article.id = i;
            cache.insert(i, article.clone());
        }
        self.cache = cache;

        info!(count = fresh.len(), hours, limit, "Fetch pass complete");
        fresh
    }

    /// Run a fetch and project the result to `{id, title, source}` triples.
    ///
    /// This is the reduced view for a downstream selection step that should
    /// not see full content; pair it with [`Self::get_by_ids`].
    pub async fn headlines(&mut self, hours: i64, limit: usize) -> Vec<Headline> {
        let articles = self.fetch_recent(hours, limit).await;
        articles.iter().map(Article::headline).collect()
    }

    /// Look up cached full records by id, best effort.
    ///
    /// Unknown ids (including ids from a previous fetch) are logged and
    /// skipped; the result keeps the input order minus misses.
    pub fn get_by_ids(&self, ids: &[usize]) -> Vec<Article> {
        let mut articles = Vec::with_capacity(ids.len());
        for &id in ids {
            match self.cache.get(&id) {
                Some(article) => articles.push(article.clone()),
                None => warn!(id, "Article id not found in cache"),
            }
        }
        articles
    }
}

/// Normalize one feed's entries and append those inside the recency window.
///
/// Returns how many entries were kept. Timestamp resolution falls back
/// `published` → `updated` → `now`, so an undated entry is treated as just
/// published (and left to the stale-year denylist to catch).
fn collect_recent(
    fetched: &FetchedFeed,
    feed_url: &str,
    cutoff: DateTime<Utc>,
    now: DateTime<Utc>,
    out: &mut Vec<Article>,
) -> usize {
    let source = fetched.title.clone().unwrap_or_else(|| feed_url.to_string());
    let before = out.len();

    for entry in &fetched.entries {
        let published = resolve_published(entry, now);
        if published <= cutoff {
            continue;
        }
        out.push(Article {
            // real ids are assigned after filtering
            id: 0,
            title: entry.title.clone().unwrap_or_else(|| NO_TITLE.to_string()),
            link: entry.link.clone().unwrap_or_default(),
            source: source.clone(),
            published,
            summary: truncate_chars(entry.summary.as_deref().unwrap_or(""), SUMMARY_MAX_CHARS),
        });
    }

    out.len() - before
}

/// Resolve an entry's timestamp: published, else updated, else `now`.
fn resolve_published(entry: &RawEntry, now: DateTime<Utc>) -> DateTime<Utc> {
    entry.published.or(entry.updated).unwrap_or(now)
}
