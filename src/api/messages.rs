use serde::Deserialize;

use super::domains::Domain;
use crate::client::{ApiResult, MailerSendClient};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const MESSAGES_PATH: &str = "/messages";

/// Entry of [`MessagesService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessageSummary {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A sent message with its individual emails.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SentMessage {
    pub id: String,
    pub emails: Vec<MessageEmail>,
    pub domain: Domain,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessageEmail {
    pub id: String,
    pub from: String,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub tags: serde_json::Value,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMessageOptions {
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListMessageOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MessagesService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> MessagesService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListMessageOptions) -> ApiResult<ListRoot<MessageSummary>> {
        self.client.get(MESSAGES_PATH, Some(options)).await
    }

    pub async fn get(&self, message_id: &str) -> ApiResult<DataRoot<SentMessage>> {
        self.client
            .get::<_, ()>(&format!("{MESSAGES_PATH}/{message_id}"), None)
            .await
    }
}
