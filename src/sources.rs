//! Feed sources: the fetch seam and its RSS/Atom transport.
//!
//! The orchestrator only needs one capability from the outside world: given
//! a source URL, hand back that source's entries. [`FetchEntries`] is that
//! seam; [`RssTransport`] is the real implementation (HTTP via `reqwest`,
//! parsing via `feed-rs`). Tests substitute their own implementation to
//! drive the pipeline without a network.

use std::error::Error;
use std::time::Duration;

use feed_rs::parser;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::models::{FetchedFeed, RawEntry};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout so a dead source cannot wedge a whole fetch pass.
const FETCH_TIMEOUT_SECS: u64 = 15;

/// Capability to fetch raw entries from a feed source.
///
/// Implementors retrieve and parse one source identified by URL. Errors are
/// the caller's problem; the orchestrator logs and skips a failing source
/// rather than aborting the pass.
pub trait FetchEntries {
    /// Retrieve and parse the feed at `url`.
    async fn fetch_entries(&self, url: &str) -> Result<FetchedFeed, Box<dyn Error>>;
}

/// HTTP transport that parses RSS and Atom feeds.
pub struct RssTransport {
    client: Client,
}

impl RssTransport {
    /// Build a transport with a shared client, UA string, and timeout.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl FetchEntries for RssTransport {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_entries(&self, url: &str) -> Result<FetchedFeed, Box<dyn Error>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("feed fetch failed with HTTP status {status}").into());
        }

        let bytes = response.bytes().await?;
        let feed = parser::parse(bytes.as_ref())?;
        let fetched = convert_feed(feed);
        debug!(url, entries = fetched.entries.len(), "Parsed feed");
        Ok(fetched)
    }
}

/// Flatten a parsed `feed-rs` feed into the pipeline's raw shape.
fn convert_feed(feed: feed_rs::model::Feed) -> FetchedFeed {
    let title = feed.title.map(|t| t.content);
    let entries = feed
        .entries
        .into_iter()
        .map(|entry| RawEntry {
            title: entry.title.map(|t| t.content),
            link: entry.links.first().map(|l| l.href.clone()),
            summary: entry.summary.map(|s| s.content),
            published: entry.published,
            updated: entry.updated,
        })
        .collect();

    FetchedFeed { title, entries }
}
