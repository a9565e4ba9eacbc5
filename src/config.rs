//! Configuration types for feedtop

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Feed endpoint configuration (host, ranking window, item limit)
///
/// Groups settings that shape the listing URL. Used as a nested sub-config
/// within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the content-aggregation API (default: "https://www.reddit.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Ranking to request (default: "top")
    #[serde(default = "default_sort")]
    pub sort: String,

    /// Time window for the ranking (default: "day")
    #[serde(default = "default_window")]
    pub window: String,

    /// Maximum number of items per listing (default: 5)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sort: default_sort(),
            window: default_window(),
            limit: default_limit(),
        }
    }
}

/// HTTP client configuration
///
/// Settings for the shared connection context created once at startup and
/// reused by every reporter task.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout (None = no timeout; a hung request stalls only its own task)
    #[serde(default)]
    pub timeout: Option<Duration>,

    /// User-Agent header sent with every request (default: "feedtop")
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Main configuration for [`FeedTop`](crate::FeedTop)
///
/// Defaults reproduce the reference scenario: the top 5 items of the current
/// day for the topics `python`, `programming`, and `compsci`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Topics to report, one fire-and-forget task each
    #[serde(default = "default_topics")]
    pub topics: Vec<String>,

    /// Feed endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topics: default_topics(),
            api: ApiConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.reddit.com".to_string()
}

fn default_sort() -> String {
    "top".to_string()
}

fn default_window() -> String {
    "day".to_string()
}

fn default_limit() -> u32 {
    5
}

fn default_user_agent() -> String {
    concat!("feedtop/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_topics() -> Vec<String> {
    vec![
        "python".to_string(),
        "programming".to_string(),
        "compsci".to_string(),
    ]
}
