use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::domains::Domain;
use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};
use crate::webhook::WebhookEventType;

const WEBHOOKS_PATH: &str = "/webhooks";

/// Registered email webhook. Incoming calls are verified with [`crate::webhook::construct_event`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub id: String,
    pub url: String,
    pub events: Vec<String>,
    pub name: String,
    pub enabled: bool,
    pub editable: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub domain: Option<Domain>,
}

/// `domain_id` is always sent, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWebhookOptions {
    pub domain_id: String,
    pub limit: i32,
}

impl QueryParams for ListWebhookOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .always("domain_id", &self.domain_id)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateWebhookOptions {
    pub name: String,
    pub domain_id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub events: Vec<WebhookEventType>,
}

/// Changes applied by [`WebhooksService::update`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWebhookOptions {
    #[serde(skip)]
    pub webhook_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<WebhookEventType>,
}

#[derive(Debug, Clone, Copy)]
pub struct WebhooksService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> WebhooksService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListWebhookOptions) -> ApiResult<ListRoot<Webhook>> {
        self.client.get(WEBHOOKS_PATH, Some(options)).await
    }

    pub async fn get(&self, webhook_id: &str) -> ApiResult<DataRoot<Webhook>> {
        self.client
            .get::<_, ()>(&format!("{WEBHOOKS_PATH}/{webhook_id}"), None)
            .await
    }

    pub async fn create(&self, options: &CreateWebhookOptions) -> ApiResult<DataRoot<Webhook>> {
        self.client
            .send_json(Method::POST, WEBHOOKS_PATH, Some(options))
            .await
    }

    pub async fn update(&self, options: &UpdateWebhookOptions) -> ApiResult<DataRoot<Webhook>> {
        let path = format!("{WEBHOOKS_PATH}/{}", options.webhook_id);
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(&self, webhook_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{WEBHOOKS_PATH}/{webhook_id}"))
            .await
    }
}
