//! In-memory transport shared by the unit tests of every resource.

use std::sync::{Arc, Mutex};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio_util::sync::CancellationToken;

use super::transport::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportError};
use super::MailerSendClient;
use crate::domain::ApiKey;

#[derive(Debug, Clone)]
enum Reply {
    Respond {
        status: u16,
        headers: HeaderMap,
        body: Vec<u8>,
    },
    Fail(String),
    Hang,
    CancelThenFail(CancellationToken),
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    reply: Reply,
}

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

impl FakeTransport {
    fn with_reply(reply: Reply) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                reply,
            })),
        }
    }

    pub(crate) fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::with_reply(Reply::Respond {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        })
    }

    /// Every call fails before a response is produced.
    pub(crate) fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_owned()))
    }

    /// Every call waits forever.
    pub(crate) fn hanging() -> Self {
        Self::with_reply(Reply::Hang)
    }

    /// Cancels `token` while the call is in flight, then fails.
    pub(crate) fn cancelling(token: CancellationToken) -> Self {
        Self::with_reply(Reply::CancelThenFail(token))
    }

    pub(crate) fn with_header(self, name: &'static str, value: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            if let Reply::Respond { headers, .. } = &mut state.reply {
                headers.insert(
                    HeaderName::from_static(name),
                    HeaderValue::from_str(value).unwrap(),
                );
            }
        }
        self
    }

    pub(crate) fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.state
            .lock()
            .unwrap()
            .requests
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub(crate) fn last_url(&self) -> String {
        self.last_request().url.to_string()
    }

    pub(crate) fn last_body_json(&self) -> serde_json::Value {
        let body = self.last_request().body.expect("request had no body");
        serde_json::from_slice(&body).unwrap()
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let reply = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state.reply.clone()
            };
            match reply {
                Reply::Respond {
                    status,
                    headers,
                    body,
                } => Ok(HttpResponse {
                    status,
                    headers,
                    body,
                }),
                Reply::Fail(message) => Err(message.into()),
                Reply::Hang => std::future::pending().await,
                Reply::CancelThenFail(token) => {
                    token.cancel();
                    Err("connection reset".into())
                }
            }
        })
    }
}

pub(crate) fn make_client(transport: FakeTransport) -> MailerSendClient {
    MailerSendClient::builder(ApiKey::new("test-key").unwrap())
        .transport(Arc::new(transport))
        .build()
        .unwrap()
}
