//! Verification of incoming webhook calls.
//!
//! MailerSend signs every call with HMAC-SHA256 over the raw request body, keyed with the
//! webhook's signing secret, and sends the lowercase hex digest in the `Signature` header.
//! The body is only parsed after the signature matches.

mod event;

use std::io::Read;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub use event::{
    ActivityEventData, ActivityEventEmail, ActivityEventMessage, ActivityEventRecipient,
    WebhookEvent, WebhookEventData, WebhookEventType,
};

/// Name of the header carrying the signature.
pub const SIGNATURE_HEADER: &str = "Signature";

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook signature is missing or does not match")]
    InvalidSignature,
    #[error("failed to read webhook body")]
    Io(#[from] std::io::Error),
    #[error("failed to decode webhook body")]
    Json(#[from] serde_json::Error),
}

/// Hex HMAC-SHA256 of `body` keyed with `secret`, as sent in the `Signature` header.
pub fn compute_signature(body: &[u8], secret: &str) -> Result<String, WebhookError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| WebhookError::InvalidSignature)?;
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify `signature` against `body` and decode the event.
pub fn construct_event(
    body: &[u8],
    signature: Option<&str>,
    secret: &str,
) -> Result<WebhookEvent, WebhookError> {
    let Some(signature) = signature else {
        tracing::debug!("webhook signature header missing");
        return Err(WebhookError::InvalidSignature);
    };

    let expected = compute_signature(body, secret)?;
    if !bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
        tracing::debug!(body_len = body.len(), "webhook signature mismatch");
        return Err(WebhookError::InvalidSignature);
    }

    Ok(serde_json::from_slice(body)?)
}

/// Like [`construct_event`], reading the whole body from `reader` first.
pub fn construct_event_from_reader<R: Read>(
    mut reader: R,
    signature: Option<&str>,
    secret: &str,
) -> Result<WebhookEvent, WebhookError> {
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    construct_event(&body, signature, secret)
}
