use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const IDENTITIES_PATH: &str = "/identities";

/// A verified sender identity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub reply_to_email: serde_json::Value,
    pub reply_to_name: serde_json::Value,
    pub is_verified: bool,
    pub resends: i64,
    pub add_note: bool,
    pub personal_note: serde_json::Value,
    pub domain: IdentityDomain,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdentityDomain {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// `domain_id` is always sent, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListIdentityOptions {
    pub domain_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListIdentityOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .always("domain_id", &self.domain_id)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

/// Body of create and update calls. Empty strings are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentityOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reply_to_email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reply_to_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_note: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub personal_note: String,
}

#[derive(Debug, Clone, Copy)]
pub struct IdentitiesService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> IdentitiesService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListIdentityOptions) -> ApiResult<ListRoot<Identity>> {
        self.client.get(IDENTITIES_PATH, Some(options)).await
    }

    pub async fn get(&self, identity_id: &str) -> ApiResult<DataRoot<Identity>> {
        self.client
            .get::<_, ()>(&format!("{IDENTITIES_PATH}/{identity_id}"), None)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> ApiResult<DataRoot<Identity>> {
        self.client
            .get::<_, ()>(&format!("{IDENTITIES_PATH}/email/{email}"), None)
            .await
    }

    pub async fn create(&self, options: &IdentityOptions) -> ApiResult<DataRoot<Identity>> {
        self.client
            .send_json(Method::POST, IDENTITIES_PATH, Some(options))
            .await
    }

    pub async fn update(
        &self,
        identity_id: &str,
        options: &IdentityOptions,
    ) -> ApiResult<DataRoot<Identity>> {
        let path = format!("{IDENTITIES_PATH}/{identity_id}");
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn update_by_email(
        &self,
        email: &str,
        options: &IdentityOptions,
    ) -> ApiResult<DataRoot<Identity>> {
        let path = format!("{IDENTITIES_PATH}/email/{email}");
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(&self, identity_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{IDENTITIES_PATH}/{identity_id}"))
            .await
    }

    pub async fn delete_by_email(&self, email: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{IDENTITIES_PATH}/email/{email}"))
            .await
    }
}
