use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const USERS_PATH: &str = "/users";

/// Account member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub status: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUserOptions {
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListUserOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InviteUserOptions {
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateUserOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role: String,
}

#[derive(Debug, Clone, Copy)]
pub struct UsersService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListUserOptions) -> ApiResult<ListRoot<User>> {
        self.client.get(USERS_PATH, Some(options)).await
    }

    pub async fn get(&self, user_id: &str) -> ApiResult<DataRoot<User>> {
        self.client
            .get::<_, ()>(&format!("{USERS_PATH}/{user_id}"), None)
            .await
    }

    pub async fn invite(&self, options: &InviteUserOptions) -> ApiResult<DataRoot<User>> {
        self.client
            .send_json(Method::POST, USERS_PATH, Some(options))
            .await
    }

    pub async fn update(
        &self,
        user_id: &str,
        options: &UpdateUserOptions,
    ) -> ApiResult<DataRoot<User>> {
        let path = format!("{USERS_PATH}/{user_id}");
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(&self, user_id: &str) -> Result<Response, MailerSendError> {
        self.client.delete(&format!("{USERS_PATH}/{user_id}")).await
    }
}
