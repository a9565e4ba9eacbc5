//! # feedtop
//!
//! Concurrent top-feed reporter for topic-based content aggregators.
//!
//! feedtop fetches the "top" listing of several topic feeds concurrently,
//! parses each JSON response, and prints one line per item followed by a
//! completion line per topic. Each topic is an independent fire-and-forget
//! task over a shared HTTP connection pool; a failure in one topic never
//! affects the others. The process runs until interrupted, at which point
//! the shared connection context is torn down exactly once and the process
//! exits cleanly.
//!
//! ## Quick Start
//!
//! ```no_run
//! use feedtop::{Config, FeedTop, run_with_shutdown};
//!
//! #[tokio::main]
//! async fn main() -> feedtop::Result<()> {
//!     let feedtop = FeedTop::new(Config::default())?;
//!
//!     // One fire-and-forget task per configured topic
//!     feedtop.spawn_reporters();
//!
//!     // Run with automatic signal handling
//!     run_with_shutdown(feedtop).await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// HTTP fetching over the shared connection context
pub mod fetcher;
/// Task orchestration
pub mod orchestrator;
/// Feed reporting
pub mod reporter;
/// Core types and events
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, Config, HttpConfig};
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use orchestrator::FeedTop;
pub use reporter::FeedReporter;
pub use types::{Event, FeedItem};

/// Helper function to run the orchestrator with graceful signal handling.
///
/// Waits for a termination signal and then calls the orchestrator's
/// `shutdown()` method, abandoning any in-flight reports. Natural completion
/// of all reporter tasks does not end the run; only a signal does.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal
///   registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
pub async fn run_with_shutdown(feedtop: FeedTop) -> Result<()> {
    wait_for_signal().await;
    feedtop.shutdown();
    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Signal registration may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), _) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            if let Ok(mut sigint) = signal(SignalKind::interrupt()) {
                sigint.recv().await;
                tracing::info!("Received SIGINT signal (Ctrl+C)");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
        (_, Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM signal");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
