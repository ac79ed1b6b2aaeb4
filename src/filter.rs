//! The stale-article firewall.
//!
//! Removes any article older than a hard age ceiling (24 hours by default)
//! or whose text references a denylisted stale year. The orchestrator
//! re-applies this filter after its own recency window, so a caller asking
//! for a wider window can never pull stale articles through.
//!
//! The year denylist exists because outdated entries have slipped past
//! date-based checks before: feeds that republish old items with fresh
//! timestamps, and entries whose broken dates fall back to fetch time. It
//! is a heuristic safety net, not a correctness guarantee, and the pattern
//! list needs updating as calendar years advance.

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::models::Article;
use crate::utils::truncate_for_log;

/// Hard age ceiling applied regardless of the caller's recency window.
pub const DEFAULT_MAX_AGE_HOURS: i64 = 24;

/// Year markers known to indicate stale content, `\b`-anchored.
pub const DEFAULT_STALE_YEAR_PATTERNS: [&str; 3] = [r"\b2022\b", r"\b2023\b", r"\b2024\b"];

static DEFAULT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DEFAULT_STALE_YEAR_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("default stale-year pattern must compile"))
        .collect()
});

/// Staleness policy: age ceiling plus stale-year denylist.
///
/// The switch is an explicit field rather than a process-wide flag, so two
/// orchestrators in the same process can run different policies. Disabling
/// it is an opt-out for debugging only; the default is enabled.
#[derive(Debug, Clone)]
pub struct StaleFilter {
    /// When false the filter passes everything through and logs a warning.
    pub enabled: bool,
    /// Articles strictly older than this many hours are rejected.
    pub max_age_hours: i64,
    /// Denylist matched against `"{title} {summary}"`.
    pub stale_patterns: Vec<Regex>,
}

impl Default for StaleFilter {
    fn default() -> Self {
        Self {
            enabled: true,
            max_age_hours: DEFAULT_MAX_AGE_HOURS,
            stale_patterns: DEFAULT_PATTERNS.clone(),
        }
    }
}

impl StaleFilter {
    /// Apply the filter relative to the current time.
    pub fn apply(&self, articles: Vec<Article>) -> Vec<Article> {
        self.apply_at(articles, Utc::now())
    }

    /// Apply the filter relative to an explicit `now`.
    ///
    /// Rules, first match wins:
    /// 1. reject if `published < now - max_age_hours`
    /// 2. reject if any denylist pattern matches the title+summary text
    ///
    /// Accepted articles keep their input order.
    pub fn apply_at(&self, articles: Vec<Article>, now: DateTime<Utc>) -> Vec<Article> {
        if !self.enabled {
            warn!("Staleness filter is DISABLED; stale news may leak through");
            return articles;
        }

        let cutoff = now - Duration::hours(self.max_age_hours);
        let mut fresh = Vec::with_capacity(articles.len());
        let mut rejected = 0usize;

        'articles: for article in articles {
            if article.published < cutoff {
                let age_hours = (now - article.published).num_seconds() as f64 / 3600.0;
                debug!(
                    age_hours,
                    title = %truncate_for_log(&article.title, 50),
                    "Rejected article over age ceiling"
                );
                rejected += 1;
                continue;
            }

            let text = format!("{} {}", article.title, article.summary);
            for pattern in &self.stale_patterns {
                if pattern.is_match(&text) {
                    debug!(
                        pattern = %pattern,
                        title = %truncate_for_log(&article.title, 50),
                        "Rejected article referencing stale year"
                    );
                    rejected += 1;
                    continue 'articles;
                }
            }

            fresh.push(article);
        }

        info!(
            accepted = fresh.len(),
            rejected,
            cutoff = %cutoff,
            "Stale filter applied"
        );
        if fresh.is_empty() {
            warn!(
                max_age_hours = self.max_age_hours,
                "All articles filtered out; no fresh news within the age ceiling"
            );
        }

        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(title: &str, summary: &str, published: DateTime<Utc>) -> Article {
        Article {
            id: 0,
            title: title.to_string(),
            link: String::new(),
            source: "test".to_string(),
            published,
            summary: summary.to_string(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_rejects_articles_over_age_ceiling() {
        let now = fixed_now();
        let filter = StaleFilter::default();
        let input = vec![
            article("fresh", "", now - Duration::hours(1)),
            article("stale", "", now - Duration::hours(25)),
        ];

        let out = filter.apply_at(input, now);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "fresh");
    }

    #[test]
    fn test_boundary_age_survives() {
        // Exactly 24h old is not strictly older than the cutoff.
        let now = fixed_now();
        let filter = StaleFilter::default();
        let input = vec![article("edge", "", now - Duration::hours(24))];

        let out = filter.apply_at(input, now);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_rejects_stale_year_in_title_or_summary() {
        let now = fixed_now();
        let filter = StaleFilter::default();
        let input = vec![
            article("Retrospective: in 2023 the markets fell", "", now),
            article("Clean title", "this happened back in 2024", now),
            article("Clean", "clean summary", now),
        ];

        let out = filter.apply_at(input, now);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Clean");
    }

    #[test]
    fn test_year_pattern_is_word_bounded() {
        let now = fixed_now();
        let filter = StaleFilter::default();
        // 20231 should not match \b2023\b
        let input = vec![article("Part no. 20231 recalled", "", now)];

        let out = filter.apply_at(input, now);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_disabled_filter_passes_everything() {
        let now = fixed_now();
        let filter = StaleFilter {
            enabled: false,
            ..StaleFilter::default()
        };
        let input = vec![
            article("ancient", "", now - Duration::hours(300)),
            article("year ref", "in 2023", now),
        ];

        let out = filter.apply_at(input, now);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let now = fixed_now();
        let filter = StaleFilter::default();
        let input = vec![
            article("a", "", now - Duration::hours(1)),
            article("b", "", now - Duration::hours(30)),
            article("c", "", now - Duration::hours(2)),
            article("d", "", now - Duration::hours(3)),
        ];

        let out = filter.apply_at(input, now);
        let titles: Vec<&str> = out.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_custom_pattern_list() {
        let now = fixed_now();
        let filter = StaleFilter {
            stale_patterns: vec![Regex::new(r"\b2025\b").unwrap()],
            ..StaleFilter::default()
        };
        let input = vec![
            article("in 2025 this happened", "", now),
            article("in 2023 this happened", "", now),
        ];

        let out = filter.apply_at(input, now);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "in 2023 this happened");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let filter = StaleFilter::default();
        let out = filter.apply_at(Vec::new(), fixed_now());
        assert!(out.is_empty());
    }
}
