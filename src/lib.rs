//! Typed Rust client for the MailerSend email and SMS HTTP API.
//!
//! The crate is split the same way requests flow: a domain layer of validated values and
//! response envelopes, a transport layer for wire-format details (query strings, JSON
//! bodies), a client layer that sends requests and classifies responses, and one service
//! handle per API resource under [`api`]. Incoming webhook calls are verified with
//! [`webhook::construct_event`].
//!
//! ```rust,no_run
//! use mailersend::api::email::{Message, Recipient};
//! use mailersend::{ApiKey, MailerSendClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MailerSendClient::new(ApiKey::new("mlsn.xxx")?);
//!
//!     let mut message = Message::new();
//!     message
//!         .set_from(Recipient::new("info@domain.com").with_name("Your Name"))
//!         .set_recipients(vec![Recipient::new("recipient@email.com")])
//!         .set_subject("Hello")
//!         .set_text("Hello from MailerSend.");
//!
//!     let response = client.email().send(&message).await?;
//!     println!("queued as {:?}", response.message_id());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod api;
pub mod client;
pub mod domain;
mod transport;
pub mod webhook;

pub use client::{
    ApiError, ApiResult, CancelReason, HttpRequest, HttpResponse, HttpTransport,
    MailerSendClient, MailerSendClientBuilder, MailerSendError, Response,
};
pub use domain::{
    ApiKey, DataRoot, Filter, Links, ListRoot, LooseNumber, Meta, PhoneNumber, RawPhoneNumber,
    ValidationError,
};
pub use webhook::{WebhookError, WebhookEvent, WebhookEventType};
