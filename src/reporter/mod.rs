//! Feed reporting: fetch a topic's top listing, parse it, and print it.
//!
//! A report is one pass over one topic: build the feed URL, issue a single
//! GET through the shared [`Fetcher`], decode the body as UTF-8, parse the
//! listing shape `{data: {children: [{data: {score, title, url}}]}}`, and
//! print one line per item followed by a completion line. Any failure ends
//! this report without touching sibling reports.

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::types::FeedItem;
use serde::Deserialize;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Wire shape of a listing response
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: FeedItem,
}

/// Parse a listing body into feed items, preserving `children` order
///
/// # Errors
/// Returns `Error::Parse` if the text is not valid JSON or lacks the
/// expected shape (missing field, wrong type).
pub fn parse_listing(text: &str) -> Result<Vec<FeedItem>> {
    let listing: Listing = serde_json::from_str(text)?;
    Ok(listing.data.children.into_iter().map(|c| c.data).collect())
}

/// Write a topic's report: one line per item, then the completion line
///
/// The completion line reproduces the original program's output literally,
/// stray comma included.
pub fn write_report<W: Write>(out: &mut W, topic: &str, items: &[FeedItem]) -> std::io::Result<()> {
    for item in items {
        writeln!(out, "{}: {} ({})", item.score, item.title, item.link)?;
    }
    writeln!(out, "DONE: , {}", topic)?;
    Ok(())
}

/// Reports one topic's top listing to stdout
pub struct FeedReporter {
    /// Shared connection context for feed requests
    fetcher: Arc<Fetcher>,

    /// Configuration (endpoint pattern, topics)
    config: Arc<Config>,
}

impl FeedReporter {
    /// Create a new feed reporter over a shared fetcher
    pub fn new(fetcher: Arc<Fetcher>, config: Arc<Config>) -> Self {
        Self { fetcher, config }
    }

    /// Build the feed URL for a topic by template substitution
    ///
    /// # Errors
    /// Returns `Error::InvalidUrl` if the configured base URL and topic do
    /// not combine into a valid absolute URL.
    pub fn feed_url(&self, topic: &str) -> Result<Url> {
        let api = &self.config.api;
        let url = format!(
            "{}/r/{}/top.json?sort={}&t={}&limit={}",
            api.base_url, topic, api.sort, api.window, api.limit
        );
        Ok(Url::parse(&url)?)
    }

    /// Fetch and parse a topic's top listing
    ///
    /// Performs the single suspension point (the network await), then
    /// decodes the body as UTF-8 and parses the listing shape.
    ///
    /// # Errors
    /// `Error::UnexpectedStatus` for a non-success status, `Error::Decode`
    /// for non-UTF-8 bytes, `Error::Parse` for malformed or misshapen JSON.
    pub async fn fetch_items(&self, topic: &str) -> Result<Vec<FeedItem>> {
        let url = self.feed_url(topic)?;
        let body = self.fetcher.fetch(&url).await?;
        let text = String::from_utf8(body)?;
        let items = parse_listing(&text)?;
        debug!(topic = %topic, items = items.len(), "listing parsed");
        Ok(items)
    }

    /// Report a topic's top listing to stdout
    ///
    /// Prints item lines in listing order, then the completion line. Stdout
    /// is locked for the duration of the write so a report's lines never
    /// interleave with another task's output mid-line.
    ///
    /// Returns the number of item lines printed.
    pub async fn report(&self, topic: &str) -> Result<usize> {
        let items = self.fetch_items(topic).await?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, topic, &items)?;

        Ok(items.len())
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
