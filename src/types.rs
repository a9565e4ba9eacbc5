//! Core types and events for feedtop

use serde::{Deserialize, Serialize};

/// One entry of a top listing
///
/// Derived from one element of the listing's `data.children[].data` array.
/// Exists only for the duration of a report; nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Item score (vote count)
    pub score: i64,

    /// Item title
    pub title: String,

    /// Item link URL
    #[serde(rename = "url")]
    pub link: String,
}

/// Events emitted while reporter tasks run
///
/// Broadcast to all subscribers; if nobody listens the events are dropped.
/// A `ReportFailed` event is the only visible trace of a failed task — the
/// failure never reaches sibling tasks or the orchestrator.
#[derive(Clone, Debug)]
pub enum Event {
    /// A topic's report finished and its completion line was printed
    ReportCompleted {
        /// The topic that was reported
        topic: String,
        /// Number of item lines printed
        items: usize,
    },

    /// A topic's report ended early; no further output for this topic
    ReportFailed {
        /// The topic whose report failed
        topic: String,
        /// Rendered error message
        error: String,
    },
}
