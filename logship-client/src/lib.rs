//! Logship HTTP Client
//!
//! A small, type-safe client for submitting log records to a remote
//! log-ingestion HTTP endpoint.
//!
//! The client validates the endpoint address up front, serializes each record
//! to one JSON object per line, and posts the newline-delimited body in a
//! single request. There is no batching across calls, no retry, and no
//! buffering; every call maps to exactly one HTTP exchange.
//!
//! # Example
//!
//! ```no_run
//! use logship_client::{LogEndpoint, LogLevel, LogRecord};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let endpoint = LogEndpoint::new("https://collectors.example.com/receiver/v1/http/abc123")?;
//!
//!     endpoint
//!         .post_logs(&[
//!             LogRecord::new(LogLevel::Info, "service started"),
//!             LogRecord::new(LogLevel::Warning, "cache cold").with_field("entries", 0),
//!         ])
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod encode;
mod logs;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use logship_core::domain::log::{LogLevel, LogRecord};

use reqwest::{Client, Url};

/// A validated log-ingestion endpoint
///
/// The address is checked once at construction and stored verbatim; the value
/// is immutable afterwards and cheap to clone, so it can be shared freely
/// between concurrent callers.
#[derive(Debug, Clone)]
pub struct LogEndpoint {
    /// Destination address, exactly as the caller supplied it
    url: String,
    /// HTTP client instance
    client: Client,
}

impl LogEndpoint {
    /// Create a new endpoint with a default HTTP client
    ///
    /// # Arguments
    /// * `url` - The ingestion address (e.g., "https://collectors.example.com/receiver/v1/http/abc123")
    ///
    /// # Errors
    /// Returns [`ClientError::BuildingClient`] if the address does not parse
    /// as a URL. Nothing beyond parseability is checked; a URL without a host
    /// is accepted as long as the parser accepts it.
    ///
    /// # Example
    /// ```
    /// use logship_client::LogEndpoint;
    ///
    /// let endpoint = LogEndpoint::new("http://localhost:8080/logs").unwrap();
    /// assert_eq!(endpoint.url(), "http://localhost:8080/logs");
    /// ```
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_client(url, Client::new())
    }

    /// Create a new endpoint with a custom HTTP client
    ///
    /// This is the configuration surface of the library: timeouts, proxies,
    /// and TLS settings are whatever the provided client was built with.
    ///
    /// # Arguments
    /// * `url` - The ingestion address
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use logship_client::LogEndpoint;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let endpoint = LogEndpoint::with_client("http://localhost:8080/logs", http_client).unwrap();
    /// ```
    pub fn with_client(url: impl Into<String>, client: Client) -> Result<Self> {
        let url = url.into();
        if Url::parse(&url).is_err() {
            return Err(ClientError::BuildingClient(url));
        }
        Ok(Self { url, client })
    }

    /// Get the endpoint address
    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}
