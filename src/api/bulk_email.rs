use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;

use super::email::Message;
use crate::client::{ApiResult, MailerSendClient};
use crate::domain::DataRoot;

const BULK_EMAIL_PATH: &str = "/bulk-email";

/// Acknowledgement of a queued bulk request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BulkEmailResponse {
    pub message: String,
    pub bulk_email_id: String,
}

/// Processing state of a bulk request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BulkEmailStatus {
    pub id: String,
    pub state: String,
    pub total_recipients_count: i64,
    pub suppressed_recipients_count: i64,
    pub suppressed_recipients: serde_json::Value,
    pub validation_errors_count: i64,
    pub validation_errors: serde_json::Value,
    pub messages_id: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub struct BulkEmailService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> BulkEmailService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    /// `POST /bulk-email` with a JSON array of messages.
    pub async fn send(&self, messages: &[Message]) -> ApiResult<BulkEmailResponse> {
        self.client
            .send_json(Method::POST, BULK_EMAIL_PATH, Some(messages))
            .await
    }

    /// `GET /bulk-email/{bulk_email_id}`.
    pub async fn status(&self, bulk_email_id: &str) -> ApiResult<DataRoot<BulkEmailStatus>> {
        self.client
            .get::<_, ()>(&format!("{BULK_EMAIL_PATH}/{bulk_email_id}"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::email::Recipient;
    use crate::client::testing::{FakeTransport, make_client};

    #[tokio::test]
    async fn send_posts_an_array_of_messages() {
        let body = r#"{"message":"The bulk email is being processed.","bulk_email_id":"614470d1588b866d0454f3e2"}"#;
        let transport = FakeTransport::new(202, body);
        let client = make_client(transport.clone());

        let mut first = Message::new();
        first
            .set_from(Recipient::new("info@domain.com"))
            .set_recipients(vec![Recipient::new("a@email.com")])
            .set_subject("one");
        let mut second = first.clone();
        second.set_subject("two");

        let (root, response) = client.bulk_email().send(&[first, second]).await.unwrap();
        assert_eq!(response.status(), 202);
        assert_eq!(root.bulk_email_id, "614470d1588b866d0454f3e2");

        let json = transport.last_body_json();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[1]["subject"], "two");
    }

    #[tokio::test]
    async fn status_decodes_progress() {
        let body = r#"{"data":{
          "id":"614470d1588b866d0454f3e2","state":"completed",
          "total_recipients_count":1,"suppressed_recipients_count":0,"suppressed_recipients":null,
          "validation_errors_count":0,"validation_errors":null,
          "messages_id":["61487a14608b1d0b4d506633"],
          "created_at":"2021-09-17T10:41:21.892000Z","updated_at":"2021-09-17T10:41:23.684000Z"}}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let (root, _) = client.bulk_email().status("614470d1588b866d0454f3e2").await.unwrap();
        assert_eq!(root.data.state, "completed");
        assert_eq!(root.data.messages_id, vec!["61487a14608b1d0b4d506633"]);
        assert!(root.data.created_at.is_some());
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/bulk-email/614470d1588b866d0454f3e2"
        );
    }
}
