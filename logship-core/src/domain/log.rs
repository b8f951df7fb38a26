//! Log record types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A structured log record ready for submission to an ingestion endpoint.
///
/// Every field is serialized under an explicit key; free-form context goes
/// into [`fields`](Self::fields), which is flattened into the record's own
/// object on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub level: LogLevel,
    pub message: String,
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl LogRecord {
    /// Create a record stamped with the current time and no extra fields.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            level,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Attach a free-form context field.
    ///
    /// # Example
    /// ```
    /// use logship_core::domain::log::{LogLevel, LogRecord};
    ///
    /// let record = LogRecord::new(LogLevel::Info, "user logged in")
    ///     .with_field("user_id", 42)
    ///     .with_field("component", "auth");
    /// assert_eq!(record.fields.len(), 2);
    /// ```
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Severity of a log record, serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}
