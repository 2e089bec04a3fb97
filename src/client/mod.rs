//! Client layer: builds requests, runs them through the transport and classifies responses.

mod error;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use url::Url;

pub use error::{ApiError, CancelReason, MailerSendError};
pub use transport::{
    BoxFuture, HttpRequest, HttpResponse, HttpTransport, Response, TransportError,
};

use crate::domain::{ApiKey, ValidationError};
use crate::transport::{
    QueryEncoder, QueryParams, decode_error_body, decode_json_body, encode_json_body,
    merge_query,
};
use transport::ReqwestTransport;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.mailersend.com/v1";

/// Client identification sent as `User-Agent` unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("mailersend-rust/", env!("CARGO_PKG_VERSION"));

/// Environment variable read by [`MailerSendClient::from_env`] for the API key.
pub const API_KEY_ENV: &str = "MAILERSEND_API_KEY";

/// Environment variable read by [`MailerSendClient::from_env`] for an alternative API root.
pub const API_BASE_ENV: &str = "MAILERSEND_API_BASE";

const JSON: &str = "application/json";

/// Decoded body plus the [`Response`] it came from.
pub type ApiResult<T> = Result<(T, Response), MailerSendError>;

#[derive(Clone)]
/// Builder for [`MailerSendClient`].
///
/// Use this when you need to customize the API root, timeout, user-agent or transport.
pub struct MailerSendClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
    cancellation: Option<CancellationToken>,
}

impl MailerSendClientBuilder {
    /// Create a builder with the production API root and no overrides.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            http_client: None,
            transport: None,
            cancellation: None,
        }
    }

    /// Override the API root (for example a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom `http_client` or `transport` is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest` client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use a custom [`HttpTransport`]. Takes precedence over `http_client`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Cancel every call of the built client when `token` fires.
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Build a [`MailerSendClient`].
    pub fn build(self) -> Result<MailerSendClient, MailerSendError> {
        let base_url = parse_base_url(&self.base_url)?;

        let http: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder
                    .build()
                    .map_err(|err| MailerSendError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(MailerSendClient {
            api_key: self.api_key,
            base_url,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            http,
            cancellation: self.cancellation,
            deadline: None,
        })
    }
}

fn parse_base_url(input: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    };
    let trimmed = input.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(trimmed.to_owned())
}

#[derive(Clone)]
/// MailerSend API client.
///
/// Cloning is cheap; clones share the underlying transport. Resources are reached through
/// accessors such as [`MailerSendClient::email`] or [`MailerSendClient::domains`].
///
/// Every call builds its request from the client's current settings, so a key replaced with
/// [`MailerSendClient::set_api_key`] is used by the next call.
pub struct MailerSendClient {
    api_key: ApiKey,
    base_url: String,
    user_agent: String,
    http: Arc<dyn HttpTransport>,
    cancellation: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl fmt::Debug for MailerSendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailerSendClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

impl MailerSendClient {
    /// Create a client for the production API root.
    ///
    /// For more customization, use [`MailerSendClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            http: Arc::new(ReqwestTransport::new(reqwest::Client::new())),
            cancellation: None,
            deadline: None,
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> MailerSendClientBuilder {
        MailerSendClientBuilder::new(api_key)
    }

    /// Build a client from `MAILERSEND_API_KEY` and the optional `MAILERSEND_API_BASE`.
    pub fn from_env() -> Result<Self, MailerSendError> {
        Self::from_env_values(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(API_BASE_ENV).ok(),
        )
    }

    fn from_env_values(
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, MailerSendError> {
        let api_key = ApiKey::new(api_key.unwrap_or_default())
            .map_err(|_| ValidationError::Empty { field: API_KEY_ENV })?;
        let mut builder = Self::builder(api_key);
        if let Some(base_url) = base_url.filter(|value| !value.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Replace the API key used by subsequent calls.
    pub fn set_api_key(&mut self, api_key: ApiKey) {
        self.api_key = api_key;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the transport used by subsequent calls.
    pub fn set_transport(&mut self, transport: Arc<dyn HttpTransport>) {
        self.http = transport;
    }

    /// Send subsequent calls through a preconfigured `reqwest` client.
    pub fn set_http_client(&mut self, client: reqwest::Client) {
        self.http = Arc::new(ReqwestTransport::new(client));
    }

    /// A clone whose calls stop with [`MailerSendError::Cancelled`] once `token` fires.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancellation: Some(token),
            ..self.clone()
        }
    }

    /// A clone whose calls stop with [`CancelReason::DeadlineExceeded`] after `deadline`.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// Shorthand for [`MailerSendClient::with_deadline`] relative to now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    fn endpoint(&self, path: &str) -> Result<Url, MailerSendError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    fn headers(&self, with_body: bool) -> Result<HeaderMap, MailerSendError> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", self.api_key.as_str()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        if with_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        }
        Ok(headers)
    }

    /// Build a bodiless GET; `options` become query parameters.
    pub(crate) fn new_get_request<Q: QueryParams + ?Sized>(
        &self,
        path: &str,
        options: Option<&Q>,
    ) -> Result<HttpRequest, MailerSendError> {
        let mut url = self.endpoint(path)?;
        if let Some(options) = options {
            merge_query(&mut url, QueryEncoder::encode(options));
        }
        Ok(HttpRequest {
            method: Method::GET,
            url,
            headers: self.headers(false)?,
            body: None,
        })
    }

    /// Build a request carrying `payload` as its JSON body (`null` when absent).
    pub(crate) fn new_json_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> Result<HttpRequest, MailerSendError> {
        let url = self.endpoint(path)?;
        let body = encode_json_body(payload).map_err(MailerSendError::Encode)?;
        Ok(HttpRequest {
            method,
            url,
            headers: self.headers(true)?,
            body: Some(body),
        })
    }

    fn cancel_reason(&self) -> Option<CancelReason> {
        if self
            .cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
        {
            return Some(CancelReason::Cancelled);
        }
        if self
            .deadline
            .is_some_and(|deadline| deadline <= Instant::now())
        {
            return Some(CancelReason::DeadlineExceeded);
        }
        None
    }

    /// Run `request` through the transport, racing the cancellation token and deadline.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MailerSendError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let outcome = tokio::select! {
            biased;
            () = wait_cancelled(self.cancellation.as_ref()) => {
                Err(MailerSendError::Cancelled(CancelReason::Cancelled))
            }
            () = wait_deadline(self.deadline) => {
                Err(MailerSendError::Cancelled(CancelReason::DeadlineExceeded))
            }
            result = self.http.send(request) => result.map_err(|err| match self.cancel_reason() {
                Some(reason) => MailerSendError::Cancelled(reason),
                None => MailerSendError::Transport(err),
            }),
        };

        match &outcome {
            Ok(response) => {
                tracing::debug!(
                    status = response.status,
                    bytes = response.body.len(),
                    "received response"
                );
            }
            Err(err) => tracing::debug!(error = %err, "request did not complete"),
        }
        outcome
    }

    async fn execute_checked(&self, request: HttpRequest) -> Result<HttpResponse, MailerSendError> {
        let method = request.method.clone();
        let url = request.url.clone();
        let response = self.execute(request).await?;
        check_response(&method, &url, &response)?;
        Ok(response)
    }

    /// Run `request` and decode the success body into `T`.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> ApiResult<T> {
        let response = self.execute_checked(request).await?;
        let meta = Response::from_http(&response);
        match decode_json_body(&response.body) {
            Ok(value) => Ok((value, meta)),
            Err(source) => Err(MailerSendError::Decode {
                response: meta,
                source,
            }),
        }
    }

    /// Run `request` without reading the success body.
    pub(crate) async fn call_no_content(
        &self,
        request: HttpRequest,
    ) -> Result<Response, MailerSendError> {
        let response = self.execute_checked(request).await?;
        Ok(Response::from_http(&response))
    }

    pub(crate) async fn get<T, Q>(
        &self,
        path: &str,
        options: Option<&Q>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: QueryParams + ?Sized,
    {
        let request = self.new_get_request(path, options)?;
        self.call(request).await
    }

    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.new_json_request(method, path, payload)?;
        self.call(request).await
    }

    pub(crate) async fn send_json_no_content<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> Result<Response, MailerSendError> {
        let request = self.new_json_request(method, path, payload)?;
        self.call_no_content(request).await
    }

    /// `DELETE` without a payload; the body is the JSON literal `null`.
    pub(crate) async fn delete(&self, path: &str) -> Result<Response, MailerSendError> {
        self.send_json_no_content::<()>(Method::DELETE, path, None)
            .await
    }
}

async fn wait_cancelled(token: Option<&CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}

async fn wait_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Classify a response: 2xx (including 202 Accepted) succeeds, 401 is an
/// authentication error, anything else is an API error.
pub(crate) fn check_response(
    method: &Method,
    url: &Url,
    response: &HttpResponse,
) -> Result<(), MailerSendError> {
    if response.status == 202 || (200..=299).contains(&response.status) {
        return Ok(());
    }

    let body = decode_error_body(&response.body);
    let err = ApiError {
        method: method.clone(),
        url: url.clone(),
        status: response.status,
        message: body.message,
        extra: body.extra,
        response: Response::from_http(response),
    };
    if response.status == 401 {
        Err(MailerSendError::Auth(err))
    } else {
        Err(MailerSendError::Api(err))
    }
}
