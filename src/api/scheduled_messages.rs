use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::domains::Domain;
use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const SCHEDULED_PATH: &str = "/message-schedules";

/// A message waiting for its `send_at` time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScheduledMessage {
    pub message_id: String,
    pub subject: String,
    pub send_at: Option<DateTime<Utc>>,
    pub status: String,
    pub status_message: serde_json::Value,
    pub created_at: String,
    pub domain: Option<Domain>,
    pub message: Option<ScheduledMessageRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScheduledMessageRef {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// `status` is one of `scheduled`, `sent` or `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScheduleOptions {
    pub domain_id: String,
    pub status: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListScheduleOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("domain_id", &self.domain_id)
            .omit_empty("status", &self.status)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduledMessagesService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> ScheduledMessagesService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListScheduleOptions,
    ) -> ApiResult<ListRoot<ScheduledMessage>> {
        self.client.get(SCHEDULED_PATH, Some(options)).await
    }

    pub async fn get(&self, message_id: &str) -> ApiResult<DataRoot<ScheduledMessage>> {
        self.client
            .get::<_, ()>(&format!("{SCHEDULED_PATH}/{message_id}"), None)
            .await
    }

    /// Cancel a scheduled message.
    pub async fn delete(&self, message_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{SCHEDULED_PATH}/{message_id}"))
            .await
    }
}
