use serde::Deserialize;

use super::domains::Domain;
use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const RECIPIENTS_PATH: &str = "/recipients";

/// Entry of [`RecipientsService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecipientSummary {
    pub id: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecipientDetail {
    pub id: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
    pub emails: Vec<serde_json::Value>,
    pub domain: Domain,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRecipientOptions {
    pub domain_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListRecipientOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("domain_id", &self.domain_id)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecipientsService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> RecipientsService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListRecipientOptions,
    ) -> ApiResult<ListRoot<RecipientSummary>> {
        self.client.get(RECIPIENTS_PATH, Some(options)).await
    }

    pub async fn get(&self, recipient_id: &str) -> ApiResult<DataRoot<RecipientDetail>> {
        self.client
            .get::<_, ()>(&format!("{RECIPIENTS_PATH}/{recipient_id}"), None)
            .await
    }

    pub async fn delete(&self, recipient_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{RECIPIENTS_PATH}/{recipient_id}"))
            .await
    }
}
