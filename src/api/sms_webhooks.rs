use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::sms_numbers::SmsNumber;
use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const SMS_WEBHOOKS_PATH: &str = "/sms-webhooks";

/// Webhook attached to an SMS number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmsWebhook {
    pub id: String,
    pub url: String,
    pub events: Vec<String>,
    pub name: String,
    pub enabled: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub sms_number: SmsNumber,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSmsWebhookOptions {
    pub sms_number_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListSmsWebhookOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("sms_number_id", &self.sms_number_id)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateSmsWebhookOptions {
    pub sms_number_id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Event names such as `sms.sent`, `sms.delivered` or `sms.failed`.
    pub events: Vec<String>,
}

/// Changes applied by [`SmsWebhooksService::update`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSmsWebhookOptions {
    #[serde(skip)]
    pub webhook_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
pub struct SmsWebhooksService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsWebhooksService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListSmsWebhookOptions) -> ApiResult<ListRoot<SmsWebhook>> {
        self.client.get(SMS_WEBHOOKS_PATH, Some(options)).await
    }

    pub async fn get(&self, webhook_id: &str) -> ApiResult<DataRoot<SmsWebhook>> {
        self.client
            .get::<_, ()>(&format!("{SMS_WEBHOOKS_PATH}/{webhook_id}"), None)
            .await
    }

    pub async fn create(
        &self,
        options: &CreateSmsWebhookOptions,
    ) -> ApiResult<DataRoot<SmsWebhook>> {
        self.client
            .send_json(Method::POST, SMS_WEBHOOKS_PATH, Some(options))
            .await
    }

    pub async fn update(
        &self,
        options: &UpdateSmsWebhookOptions,
    ) -> ApiResult<DataRoot<SmsWebhook>> {
        let path = format!("{SMS_WEBHOOKS_PATH}/{}", options.webhook_id);
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(&self, webhook_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{SMS_WEBHOOKS_PATH}/{webhook_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, make_client};
    use serde_json::json;

    const WEBHOOK: &str = r#"{"data":{
      "id":"aeb2bde6-27ba-47c9-8b1b-1de0e3b9f5e9","url":"https://domain.com/hook",
      "events":["sms.sent","sms.delivered"],"name":"Hook","enabled":true,
      "created_at":"2022-01-01T12:00:00.000000Z","updated_at":"2022-01-01T12:00:00.000000Z",
      "sms_number":{"id":"7z3m5jgrogdpyo6n","telephone_number":"+1234567890","paused":false}}}"#;

    #[tokio::test]
    async fn create_posts_number_and_events() {
        let transport = FakeTransport::new(201, WEBHOOK);
        let client = make_client(transport.clone());

        let options = CreateSmsWebhookOptions {
            sms_number_id: "7z3m5jgrogdpyo6n".into(),
            name: "Hook".into(),
            url: "https://domain.com/hook".into(),
            enabled: None,
            events: vec!["sms.sent".into(), "sms.delivered".into()],
        };
        let (root, _) = client.sms_webhooks().create(&options).await.unwrap();
        assert_eq!(root.data.sms_number.telephone_number, "+1234567890");
        assert_eq!(
            transport.last_body_json(),
            json!({
                "sms_number_id": "7z3m5jgrogdpyo6n",
                "name": "Hook",
                "url": "https://domain.com/hook",
                "events": ["sms.sent", "sms.delivered"]
            })
        );
    }

    #[tokio::test]
    async fn update_sends_only_changed_fields() {
        let transport = FakeTransport::new(200, WEBHOOK);
        let client = make_client(transport.clone());

        let options = UpdateSmsWebhookOptions {
            webhook_id: "aeb2bde6-27ba-47c9-8b1b-1de0e3b9f5e9".into(),
            enabled: Some(false),
            ..Default::default()
        };
        client.sms_webhooks().update(&options).await.unwrap();
        assert_eq!(transport.last_body_json(), json!({"enabled": false}));
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/sms-webhooks/aeb2bde6-27ba-47c9-8b1b-1de0e3b9f5e9"
        );
    }

    #[tokio::test]
    async fn list_by_number() {
        let transport = FakeTransport::new(200, r#"{"data":[]}"#);
        let client = make_client(transport.clone());

        let options = ListSmsWebhookOptions {
            sms_number_id: "7z3m5jgrogdpyo6n".into(),
            ..Default::default()
        };
        let (root, _) = client.sms_webhooks().list(&options).await.unwrap();
        assert!(root.data.is_empty());
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/sms-webhooks?sms_number_id=7z3m5jgrogdpyo6n"
        );
    }
}
