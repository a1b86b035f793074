//! Done queue client implementation.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::DoneError;
use crate::types::{format_instant, Message, MessageStatus, SendOptions, SendResult, StatusListEntry};

/// Namespace prefix under which caller-supplied headers are tunneled
/// through the service to the eventual callback.
pub const HEADER_PREFIX: &str = "Done-";

const HEADER_DELAY: &str = "Done-Delay";
const HEADER_NOT_BEFORE: &str = "Done-Not-Before";
const HEADER_MAX_ATTEMPTS: &str = "Done-Max-Attempts";
const HEADER_FAILURE_CALLBACK: &str = "Done-Failure-Callback";

const SEND_LABEL: &str = "Failed to send message";
const GET_LABEL: &str = "Failed to get message";
const LIST_LABEL: &str = "Failed to get messages by status";

/// Connection settings for a [`DoneClient`].
///
/// Both fields are required; neither is validated up front. A malformed
/// base URL surfaces as a request failure on the first call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL, without the `/v1` prefix.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: String,
}

/// Client for enqueuing and inspecting messages on a Done service.
///
/// Holds no mutable state beyond its configuration, so a single instance
/// can be cloned freely and used from any number of concurrent tasks.
/// Each operation is one request/response round trip; timeouts, retries
/// and cancellation are left to the caller and the underlying transport.
#[derive(Debug, Clone)]
pub struct DoneClient {
    config: ClientConfig,
    http: Client,
}

impl DoneClient {
    /// Build a client from a full configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::builder()
                .user_agent(concat!("done-client/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    /// Build a client from a base URL and token directly.
    pub fn from_parts(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(ClientConfig {
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    fn endpoint(&self, tail: impl AsRef<str>) -> String {
        format!("{}/v1/{}", self.config.base_url, tail.as_ref())
    }

    /// Enqueue a message for future delivery to `callback_url`.
    ///
    /// The callback URL is appended to the request path as supplied; the
    /// service decides what it accepts. `body`, when present, is sent as
    /// the JSON payload the service will deliver. Scheduling and retry
    /// behavior come from `options`, with service defaults filling in
    /// anything left unset.
    pub async fn send_message(
        &self,
        callback_url: &str,
        body: Option<Value>,
        options: SendOptions,
    ) -> Result<SendResult, DoneError> {
        let url = self.endpoint(callback_url);
        debug!("Sending message to {}", url);

        let mut request = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .header(CONTENT_TYPE, "application/json");

        if let Some(delay) = &options.delay {
            request = request.header(HEADER_DELAY, delay.header_value());
        }
        if let Some(not_before) = options.not_before {
            request = request.header(HEADER_NOT_BEFORE, format_instant(not_before));
        }
        if let Some(max_attempts) = options.max_attempts {
            request = request.header(HEADER_MAX_ATTEMPTS, max_attempts.to_string());
        }
        if let Some(failure_callback) = &options.failure_callback {
            request = request.header(HEADER_FAILURE_CALLBACK, failure_callback.as_str());
        }
        for (key, value) in &options.headers {
            request = request.header(format!("{HEADER_PREFIX}{key}"), value.as_str());
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let response = ensure_success(SEND_LABEL, response)?;
        Ok(response.json().await?)
    }

    /// Fetch the full state of a message by its service-assigned id.
    pub async fn get_message(&self, message_id: &str) -> Result<Message, DoneError> {
        let url = self.endpoint(message_id);
        debug!("Fetching message from {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.token)
            .send()
            .await?;
        let response = ensure_success(GET_LABEL, response)?;
        Ok(response.json().await?)
    }

    /// List messages currently in the given status, in server order.
    ///
    /// An empty listing is a normal outcome, not an error.
    pub async fn list_by_status(
        &self,
        status: MessageStatus,
    ) -> Result<Vec<StatusListEntry>, DoneError> {
        let url = self.endpoint(format!("by-status/{status}"));
        debug!("Listing messages from {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.token)
            .send()
            .await?;
        let response = ensure_success(LIST_LABEL, response)?;
        Ok(response.json().await?)
    }
}

fn ensure_success(label: &'static str, response: Response) -> Result<Response, DoneError> {
    let status = response.status();
    if !status.is_success() {
        let err = DoneError::from_status(label, status);
        warn!("{}", err);
        return Err(err);
    }
    Ok(response)
}
