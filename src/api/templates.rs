use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::domains::Domain;
use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const TEMPLATES_PATH: &str = "/templates";

/// Entry of [`TemplatesService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image_path: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemplateDetail {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image_path: String,
    pub created_at: Option<DateTime<Utc>>,
    pub category: serde_json::Value,
    pub domain: Domain,
    pub template_stats: TemplateStats,
}

/// Delivery counters of emails sent with a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateStats {
    pub total: i64,
    pub queued: i64,
    pub sent: i64,
    pub rejected: i64,
    pub delivered: i64,
    pub last_email_sent_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTemplateOptions {
    pub domain_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListTemplateOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("domain_id", &self.domain_id)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TemplatesService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> TemplatesService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListTemplateOptions) -> ApiResult<ListRoot<Template>> {
        self.client.get(TEMPLATES_PATH, Some(options)).await
    }

    pub async fn get(&self, template_id: &str) -> ApiResult<DataRoot<TemplateDetail>> {
        self.client
            .get::<_, ()>(&format!("{TEMPLATES_PATH}/{template_id}"), None)
            .await
    }

    pub async fn delete(&self, template_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{TEMPLATES_PATH}/{template_id}"))
            .await
    }
}
