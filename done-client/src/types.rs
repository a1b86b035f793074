//! Wire types exchanged with the Done service.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Render an instant the way the service expects it: ISO-8601 with a `Z`
/// suffix, subseconds only when non-zero.
pub(crate) fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Lifecycle status of a message, as assigned by the service.
///
/// The set is closed: a status the client does not recognize is a decode
/// error, not a pass-through string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageStatus {
    Created,
    Queued,
    Deliver,
    Sent,
    Retry,
    Dlq,
    Archived,
}

impl MessageStatus {
    /// Wire spelling of the status, also used in request paths.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Queued => "QUEUED",
            Self::Deliver => "DELIVER",
            Self::Sent => "SENT",
            Self::Retry => "RETRY",
            Self::Dlq => "DLQ",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Returns true if this status represents a terminal state.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Archived)
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a message should become deliverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delay {
    /// Compact relative duration such as `"5m"` or `"1h"`, forwarded
    /// verbatim for the service to interpret.
    Relative(String),
    /// Absolute delivery instant, forwarded as ISO-8601.
    At(DateTime<Utc>),
}

impl Delay {
    /// The `Done-Delay` header value for this delay.
    pub(crate) fn header_value(&self) -> String {
        match self {
            Self::Relative(duration) => duration.clone(),
            Self::At(instant) => format_instant(*instant),
        }
    }
}

impl From<&str> for Delay {
    fn from(duration: &str) -> Self {
        Self::Relative(duration.to_owned())
    }
}

impl From<String> for Delay {
    fn from(duration: String) -> Self {
        Self::Relative(duration)
    }
}

impl From<DateTime<Utc>> for Delay {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::At(instant)
    }
}

/// Per-call options for [`DoneClient::send_message`].
///
/// All fields are optional; an unset field leaves the service default in
/// effect. Never persisted, consumed by a single call.
///
/// [`DoneClient::send_message`]: crate::DoneClient::send_message
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Delivery delay, relative or absolute.
    pub delay: Option<Delay>,
    /// Earliest instant at which delivery may occur.
    pub not_before: Option<DateTime<Utc>>,
    /// Caller metadata, tunneled to the callback under the `Done-` prefix.
    pub headers: HashMap<String, String>,
    /// Delivery attempt budget before the message is dead-lettered.
    pub max_attempts: Option<u32>,
    /// Secondary URL invoked once all delivery attempts are exhausted.
    pub failure_callback: Option<String>,
}

impl SendOptions {
    #[must_use]
    pub fn with_delay(mut self, delay: impl Into<Delay>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    #[must_use]
    pub fn with_not_before(mut self, not_before: DateTime<Utc>) -> Self {
        self.not_before = Some(not_before);
        self
    }

    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    #[must_use]
    pub fn with_failure_callback(mut self, url: impl Into<String>) -> Self {
        self.failure_callback = Some(url.into());
        self
    }
}

/// Result returned after a message has been enqueued.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResult {
    pub message_id: String,
    pub scheduled_at: DateTime<Utc>,
}

/// Full server-side state of a message.
///
/// The client never owns this state; it is a read-through projection of
/// whatever the service reported at the time of the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub callback_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    pub scheduled_at: DateTime<Utc>,
    pub status: MessageStatus,
    pub attempts: u32,
    pub max_attempts: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempt_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reduced projection of a message returned by a status listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusListEntry {
    pub id: String,
    pub status: MessageStatus,
    pub attempts: u32,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempt_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
