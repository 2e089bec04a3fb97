use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::client::{ApiResult, MailerSendClient};

const API_QUOTA_PATH: &str = "/api-quota";

/// Daily request quota of the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiQuota {
    pub quota: i64,
    pub remaining: i64,
    pub reset: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ApiQuotaService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> ApiQuotaService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    /// `GET /api-quota`.
    pub async fn get(&self) -> ApiResult<ApiQuota> {
        self.client.get::<_, ()>(API_QUOTA_PATH, None).await
    }
}
