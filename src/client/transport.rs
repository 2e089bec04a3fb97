use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use reqwest::Method;
use reqwest::header::HeaderMap;
use url::Url;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error produced by an [`HttpTransport`] when no response was obtained.
pub type TransportError = Box<dyn StdError + Send + Sync>;

/// A fully-formed request, ready to go on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw response as returned by the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Executes [`HttpRequest`]s.
///
/// The default implementation is backed by `reqwest`. Implementations must be usable from
/// several calls at once; the client shares one transport between clones.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub(crate) fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method, request.url)
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        })
    }
}

/// Status and headers of a completed call.
///
/// Returned next to every decoded value and carried by API errors, so rate-limit and
/// message-id headers stay readable on failure too.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HeaderMap,
}

impl Response {
    /// Header carrying the id of a message accepted by `POST /email`.
    pub const MESSAGE_ID_HEADER: &'static str = "x-message-id";

    pub(crate) fn from_http(response: &HttpResponse) -> Self {
        Self {
            status: response.status,
            headers: response.headers.clone(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// `X-Message-Id` returned by `POST /email`.
    pub fn message_id(&self) -> Option<&str> {
        self.header(Self::MESSAGE_ID_HEADER)
    }
}
