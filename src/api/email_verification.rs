use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const EMAIL_VERIFICATION_PATH: &str = "/email-verification";

/// A list of addresses submitted for verification.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VerificationList {
    pub id: String,
    pub name: String,
    pub total: i64,
    pub verification_started: serde_json::Value,
    pub verification_ended: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: VerificationStatus,
    pub source: String,
    pub statistics: VerificationStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerificationStatus {
    pub name: String,
    pub count: i64,
}

/// Per-outcome counters of a verification list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerificationStatistics {
    pub valid: i64,
    pub catch_all: i64,
    pub mailbox_full: i64,
    pub role_based: i64,
    pub unknown: i64,
    pub syntax_error: i64,
    pub typo: i64,
    pub mailbox_not_found: i64,
    pub disposable: i64,
    pub mailbox_blocked: i64,
    pub failed: i64,
}

/// Outcome for one address of a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerificationResult {
    pub address: String,
    pub result: String,
}

/// Outcome of [`EmailVerificationService::verify_single`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SingleVerification {
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEmailVerificationOptions {
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListEmailVerificationOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateEmailVerificationOptions {
    pub name: String,
    pub emails: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
struct SingleVerificationRequest<'a> {
    email: &'a str,
}

/// Paging for [`EmailVerificationService::results`]; `email_verification_id` goes into the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationResultsOptions {
    pub email_verification_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for VerificationResultsOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EmailVerificationService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> EmailVerificationService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListEmailVerificationOptions,
    ) -> ApiResult<ListRoot<VerificationList>> {
        self.client
            .get(EMAIL_VERIFICATION_PATH, Some(options))
            .await
    }

    pub async fn get(&self, email_verification_id: &str) -> ApiResult<DataRoot<VerificationList>> {
        let path = format!("{EMAIL_VERIFICATION_PATH}/{email_verification_id}");
        self.client.get::<_, ()>(&path, None).await
    }

    pub async fn create(
        &self,
        options: &CreateEmailVerificationOptions,
    ) -> ApiResult<DataRoot<VerificationList>> {
        self.client
            .send_json(Method::POST, EMAIL_VERIFICATION_PATH, Some(options))
            .await
    }

    pub async fn delete(&self, email_verification_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{EMAIL_VERIFICATION_PATH}/{email_verification_id}"))
            .await
    }

    /// Start verifying a list created with [`create`](Self::create).
    pub async fn verify(
        &self,
        email_verification_id: &str,
    ) -> ApiResult<DataRoot<VerificationList>> {
        let path = format!("{EMAIL_VERIFICATION_PATH}/{email_verification_id}/verify");
        self.client.get::<_, ()>(&path, None).await
    }

    /// Verify one address synchronously.
    pub async fn verify_single(&self, email: &str) -> ApiResult<SingleVerification> {
        let path = format!("{EMAIL_VERIFICATION_PATH}/verify");
        let payload = SingleVerificationRequest { email };
        self.client
            .send_json(Method::POST, &path, Some(&payload))
            .await
    }

    pub async fn results(
        &self,
        options: &VerificationResultsOptions,
    ) -> ApiResult<ListRoot<VerificationResult>> {
        let path = format!(
            "{EMAIL_VERIFICATION_PATH}/{}/results",
            options.email_verification_id
        );
        self.client.get(&path, Some(options)).await
    }
}
