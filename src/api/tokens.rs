use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::DataRoot;

const TOKEN_PATH: &str = "/token";

/// An API token. `access_token` is only returned on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Token {
    pub id: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub name: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTokenOptions {
    pub name: String,
    pub domain_id: String,
    /// Scopes such as `email_full` or `domains_read`.
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTokenOptions {
    #[serde(skip)]
    pub token_id: String,
    /// `pause` or `unpause`.
    pub status: String,
}

#[derive(Debug, Clone, Copy)]
pub struct TokensService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> TokensService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, options: &CreateTokenOptions) -> ApiResult<DataRoot<Token>> {
        self.client
            .send_json(Method::POST, TOKEN_PATH, Some(options))
            .await
    }

    /// `PUT /token/{token_id}/settings`.
    pub async fn update(&self, options: &UpdateTokenOptions) -> ApiResult<DataRoot<Token>> {
        let path = format!("{TOKEN_PATH}/{}/settings", options.token_id);
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(&self, token_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{TOKEN_PATH}/{token_id}"))
            .await
    }
}
