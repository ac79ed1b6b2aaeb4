//! Binary driver: fetch once, print JSON to stdout.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use freshwire::cli::Cli;
use freshwire::config::Config;
use freshwire::fetcher::NewsFetcher;
use freshwire::sources::RssTransport;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("freshwire starting up");

    let args = Cli::parse();
    debug!(?args.hours, ?args.limit, ?args.config, "Parsed CLI arguments");

    // Configuration errors are the only fatal error class.
    let config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let feeds = if args.feeds.is_empty() {
        config.feeds.clone()
    } else {
        args.feeds.clone()
    };
    info!(feed_count = feeds.len(), "Configured feed sources");

    let mut stale_filter = config.stale_filter()?;
    if args.no_stale_filter {
        warn!("Staleness filter disabled via --no-stale-filter");
        stale_filter.enabled = false;
    }

    let transport = RssTransport::new()?;
    let mut fetcher = NewsFetcher::new(feeds, transport, stale_filter);

    let json = if args.headlines {
        let headlines = fetcher.headlines(args.hours, args.limit).await;
        serde_json::to_string_pretty(&headlines)?
    } else {
        let articles = fetcher.fetch_recent(args.hours, args.limit).await;
        serde_json::to_string_pretty(&articles)?
    };
    println!("{json}");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
