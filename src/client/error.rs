use std::fmt;

use reqwest::Method;
use url::Url;

use super::transport::{Response, TransportError};
use crate::domain::ValidationError;

/// Why a call stopped before the transport produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The client's cancellation token fired.
    Cancelled,
    /// The client's deadline passed.
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("cancelled"),
            Self::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

/// A non-success HTTP status together with the request that caused it.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub method: Method,
    pub url: Url,
    pub status: u16,
    pub message: String,
    pub extra: serde_json::Map<String, serde_json::Value>,
    pub response: Response,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {}",
            self.method, self.url, self.status, self.message
        )
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MailerSendClient`](super::MailerSendClient) operations.
///
/// Failures are never retried; the variant tells the caller what happened:
/// - the request never completed (`Transport`, `Cancelled`),
/// - the server rejected it (`Auth` for 401, `Api` for everything else),
/// - the body did not match the expected shape (`Decode`),
/// - the request could not be built (`Encode`, `Url`, `Header`, `Validation`).
pub enum MailerSendError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The call was cancelled or its deadline passed while waiting for the transport.
    #[error("request {0}")]
    Cancelled(CancelReason),

    /// HTTP 401: the API key is missing, invalid or revoked.
    #[error("authentication error: {0}")]
    Auth(ApiError),

    /// Any other non-success HTTP status.
    #[error("API error: {0}")]
    Api(ApiError),

    /// Response body could not be parsed into the expected type.
    #[error("decode error: {source}")]
    Decode {
        response: Response,
        #[source]
        source: serde_json::Error,
    },

    /// Request payload could not be serialized as JSON.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Request URL could not be built.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A header value (usually the API key) contains characters HTTP does not allow.
    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl MailerSendError {
    /// Status and headers of the response, when one was received.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Auth(err) | Self::Api(err) => Some(&err.response),
            Self::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        self.response().map(Response::status)
    }

    /// The API error payload for `Auth` and `Api` errors.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Auth(err) | Self::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
