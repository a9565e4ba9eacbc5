//! Task orchestration: one fire-and-forget reporter task per topic.
//!
//! [`FeedTop`] owns the shared connection context for the process lifetime.
//! Reporter tasks are scheduled without a structured join; each completes or
//! fails on its own, and a failure in one never affects its siblings. The
//! teardown path runs exactly once, cancelling in-flight reports.

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::reporter::FeedReporter;
use crate::types::Event;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Main orchestrator instance (cloneable - all fields are Arc-wrapped)
#[derive(Clone)]
pub struct FeedTop {
    /// Configuration (wrapped in Arc for sharing across tasks)
    config: Arc<Config>,

    /// Shared connection context, used read-only by every reporter task
    fetcher: Arc<Fetcher>,

    /// Event broadcast channel sender (multiple subscribers supported)
    event_tx: tokio::sync::broadcast::Sender<Event>,

    /// Cancelled once at shutdown; in-flight reports are abandoned, not awaited
    shutdown_token: CancellationToken,

    /// Set when the connection context has been released
    closed: Arc<AtomicBool>,
}

impl FeedTop {
    /// Create a new orchestrator
    ///
    /// Builds the shared HTTP client once; every reporter task issues its
    /// requests through it.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::new(&config.http)?;

        // Broadcast channel sized well above the per-run event count; slow
        // subscribers lag rather than block reporter tasks.
        let (event_tx, _rx) = tokio::sync::broadcast::channel(64);

        Ok(Self {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
            event_tx,
            shutdown_token: CancellationToken::new(),
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Subscribe to reporter events
    ///
    /// Multiple subscribers are supported; each receives all events
    /// independently. With no subscribers, events are silently dropped.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    /// Whether the connection context has been released
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Spawn one fire-and-forget reporter task for a topic
    ///
    /// The task prints the topic's report on success. On any error it logs
    /// and emits [`Event::ReportFailed`]; nothing is returned to a caller
    /// and sibling tasks are unaffected. If shutdown has already begun, the
    /// task exits without touching the connection context.
    pub fn spawn_reporter(&self, topic: &str) -> JoinHandle<()> {
        let reporter = FeedReporter::new(self.fetcher.clone(), self.config.clone());
        let event_tx = self.event_tx.clone();
        let token = self.shutdown_token.clone();
        let topic = topic.to_string();

        tokio::spawn(async move {
            if token.is_cancelled() {
                debug!(topic = %topic, "shutdown in progress, not starting report");
                return;
            }

            tokio::select! {
                _ = token.cancelled() => {
                    debug!(topic = %topic, "report abandoned at shutdown");
                }
                result = reporter.report(&topic) => match result {
                    Ok(items) => {
                        debug!(topic = %topic, items, "report completed");
                        event_tx.send(Event::ReportCompleted { topic, items }).ok();
                    }
                    Err(e) => {
                        error!(topic = %topic, error = %e, "report failed");
                        event_tx
                            .send(Event::ReportFailed {
                                topic,
                                error: e.to_string(),
                            })
                            .ok();
                    }
                }
            }
        })
    }

    /// Schedule one reporter task per configured topic
    ///
    /// Tasks are scheduled without waiting on any of them (fire-and-forget,
    /// not a structured join). The returned handles may be dropped freely;
    /// tests use them to await completion.
    pub fn spawn_reporters(&self) -> Vec<JoinHandle<()>> {
        info!(topics = self.config.topics.len(), "scheduling reporter tasks");
        self.config
            .topics
            .iter()
            .map(|topic| self.spawn_reporter(topic))
            .collect()
    }

    /// Release the shared connection context, exactly once
    ///
    /// The first call cancels all in-flight reports (abandoning, not
    /// awaiting them) and marks the context closed. Subsequent calls are
    /// no-ops. Returns whether this call performed the teardown.
    pub fn shutdown(&self) -> bool {
        if self.closed.swap(true, Ordering::SeqCst) {
            debug!("shutdown already performed, ignoring");
            return false;
        }

        info!("shutting down, abandoning in-flight reports");
        self.shutdown_token.cancel();
        true
    }
}
