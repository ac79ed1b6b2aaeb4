//! # freshwire
//!
//! Pulls syndicated news entries from a configured set of RSS/Atom feeds,
//! throws away anything stale or malformed, and exposes a two-stage
//! selection surface for a downstream curation step: a headline list first,
//! then full-article retrieval by identifier.
//!
//! ## Pipeline
//!
//! 1. **Fetch**: each configured source is fetched sequentially; a failing
//!    source is logged and skipped, never fatal
//! 2. **Normalize**: timestamps resolve published → updated → fetch time;
//!    summaries are bounded at 500 characters
//! 3. **Filter**: a caller-supplied recency window, then the stale-article
//!    firewall at its own fixed 24-hour ceiling
//! 4. **Address**: results are sorted newest-first, truncated, given dense
//!    ids `0..N-1`, and cached for detail lookup until the next fetch
//!
//! ## Usage
//!
//! ```ignore
//! let config = Config::default();
//! let mut fetcher = NewsFetcher::new(
//!     config.feeds.clone(),
//!     RssTransport::new()?,
//!     config.stale_filter()?,
//! );
//! let headlines = fetcher.headlines(8, 50).await;
//! let picked = fetcher.get_by_ids(&[0, 3]);
//! ```

pub mod cli;
pub mod config;
pub mod fetcher;
pub mod filter;
pub mod models;
pub mod sources;
pub mod utils;

pub use config::Config;
pub use fetcher::NewsFetcher;
pub use filter::StaleFilter;
pub use models::{Article, Headline};
pub use sources::{FetchEntries, RssTransport};
