//! Client bindings for the Done delayed message queue service.
//!
//! Done accepts messages for future delivery to a callback URL. This crate
//! is the thin HTTP binding: it builds the enqueue/fetch/list requests and
//! normalizes the responses into typed values. Scheduling, retries and
//! persistence all live in the remote service, not here.
//!
//! # Architecture
//!
//! - [`DoneClient`] - The client itself; one immutable configuration, three
//!   operations, one request per operation
//! - [`SendOptions`] - Per-call delivery options (delay, attempt budget,
//!   tunneled headers, failure callback)
//! - [`Message`] / [`StatusListEntry`] - Typed projections of server state
//! - [`MessageStatus`] - Closed status set, also used for listing queries
//!
//! # Example
//!
//! ```rust,no_run
//! use done_client::{DoneClient, SendOptions};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = DoneClient::from_parts("https://done.example.com", "secret-token");
//!
//!     let options = SendOptions::default()
//!         .with_delay("5m")
//!         .with_max_attempts(3)
//!         .with_header("X-Request-ID", "req-42");
//!
//!     let result = client
//!         .send_message("webhook", Some(json!({"kind": "reminder"})), options)
//!         .await
//!         .unwrap();
//!
//!     println!("Enqueued {} for {}", result.message_id, result.scheduled_at);
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, DoneClient, HEADER_PREFIX};
pub use error::DoneError;
pub use types::{Delay, Message, MessageStatus, SendOptions, SendResult, StatusListEntry};
