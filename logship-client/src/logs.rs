//! Log posting operations

use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::LogEndpoint;
use crate::encode;
use crate::error::{ClientError, Result};

impl LogEndpoint {
    /// Post a batch of structured records
    ///
    /// Each record is serialized to one JSON object; the objects are joined
    /// with `\n` in input order and posted as a single body. A record that is
    /// not a structured object fails the whole call before any network
    /// activity; there is no partial posting.
    ///
    /// # Arguments
    /// * `records` - The records to post, any serde-serializable struct type
    ///
    /// # Example
    /// ```no_run
    /// # use logship_client::{LogEndpoint, LogLevel, LogRecord};
    /// # async fn example() -> anyhow::Result<()> {
    /// let endpoint = LogEndpoint::new("https://collectors.example.com/receiver/v1/http/abc123")?;
    /// endpoint
    ///     .post_logs(&[LogRecord::new(LogLevel::Error, "payment failed")])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn post_logs<T: Serialize>(&self, records: &[T]) -> Result<()> {
        let body = encode::to_ndjson(records)?;

        debug!(records = records.len(), url = self.url(), "posting log batch");

        match self.post_logs_string(body).await {
            Ok(()) => Ok(()),
            // already the posting error, message stays as-is
            Err(err @ ClientError::PostingLogs(_)) => Err(err),
            Err(err) => Err(ClientError::PostingLogs(err.to_string())),
        }
    }

    /// Post a pre-formatted body
    ///
    /// The body is opaque to this call: any format goes, records delimited
    /// with `\n` by convention. The request carries no extra headers, and the
    /// response body is dropped unread; only an exact `200 OK` counts as
    /// success.
    ///
    /// Transport-level failures surface unwrapped as
    /// [`ClientError::RequestFailed`].
    pub async fn post_logs_string(&self, logs: impl Into<String>) -> Result<()> {
        let response = self.client().post(self.url()).body(logs.into()).send().await?;

        let status = response.status();
        drop(response);

        if status != StatusCode::OK {
            return Err(ClientError::unexpected_status(StatusCode::OK, status));
        }

        debug!(url = self.url(), "log batch accepted");
        Ok(())
    }
}
