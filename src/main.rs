//! feedtop: concurrently print the top items of several topic feeds.
//!
//! Schedules one reporter task per topic over a shared connection pool and
//! runs until interrupted. Item and completion lines go to stdout; logging
//! goes to stderr.

use feedtop::{Config, FeedTop, run_with_shutdown};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> feedtop::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("feedtop starting");

    let feedtop = FeedTop::new(Config::default())?;
    feedtop.spawn_reporters();

    // Runs until a termination signal arrives; finished reports do not end
    // the process.
    run_with_shutdown(feedtop).await
}
