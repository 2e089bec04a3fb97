use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

fn smtp_users_path(domain_id: &str) -> String {
    format!("/domains/{domain_id}/smtp-users")
}

/// SMTP relay credentials of a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmtpUser {
    pub id: String,
    pub name: String,
    pub username: String,
    pub enabled: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// `domain_id` goes into the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSmtpUserOptions {
    pub domain_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListSmtpUserOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateSmtpUserOptions {
    #[serde(skip)]
    pub domain_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSmtpUserOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
pub struct SmtpUsersService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmtpUsersService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListSmtpUserOptions) -> ApiResult<ListRoot<SmtpUser>> {
        self.client
            .get(&smtp_users_path(&options.domain_id), Some(options))
            .await
    }

    pub async fn get(&self, domain_id: &str, smtp_user_id: &str) -> ApiResult<DataRoot<SmtpUser>> {
        let path = format!("{}/{smtp_user_id}", smtp_users_path(domain_id));
        self.client.get::<_, ()>(&path, None).await
    }

    pub async fn create(&self, options: &CreateSmtpUserOptions) -> ApiResult<DataRoot<SmtpUser>> {
        self.client
            .send_json(Method::POST, &smtp_users_path(&options.domain_id), Some(options))
            .await
    }

    pub async fn update(
        &self,
        domain_id: &str,
        smtp_user_id: &str,
        options: &UpdateSmtpUserOptions,
    ) -> ApiResult<DataRoot<SmtpUser>> {
        let path = format!("{}/{smtp_user_id}", smtp_users_path(domain_id));
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(
        &self,
        domain_id: &str,
        smtp_user_id: &str,
    ) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{}/{smtp_user_id}", smtp_users_path(domain_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, make_client};
    use serde_json::json;

    const USER: &str = r#"{"id":"smtp-user-id","name":"Relay","username":"MS_abc@domain.com","enabled":true,"created_at":"2024-01-01T00:00:00.000000Z"}"#;

    #[tokio::test]
    async fn list_nests_under_the_domain() {
        let transport = FakeTransport::new(200, format!(r#"{{"data":[{USER}]}}"#));
        let client = make_client(transport.clone());

        let options = ListSmtpUserOptions {
            domain_id: "domain-id".into(),
            page: 1,
            limit: 25,
        };
        let (root, _) = client.smtp_users().list(&options).await.unwrap();
        assert_eq!(root.data[0].username, "MS_abc@domain.com");
        assert!(root.data[0].updated_at.is_none());
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/domains/domain-id/smtp-users?limit=25&page=1"
        );
    }

    #[tokio::test]
    async fn create_keeps_domain_out_of_the_body() {
        let transport = FakeTransport::new(201, format!(r#"{{"data":{USER}}}"#));
        let client = make_client(transport.clone());

        let options = CreateSmtpUserOptions {
            domain_id: "domain-id".into(),
            name: "Relay".into(),
            enabled: Some(true),
        };
        client.smtp_users().create(&options).await.unwrap();
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/domains/domain-id/smtp-users"
        );
        assert_eq!(transport.last_body_json(), json!({"name": "Relay", "enabled": true}));
    }

    #[tokio::test]
    async fn get_update_delete_address_one_user() {
        let transport = FakeTransport::new(200, format!(r#"{{"data":{USER}}}"#));
        let client = make_client(transport.clone());
        let url = "https://api.mailersend.com/v1/domains/domain-id/smtp-users/smtp-user-id";

        client.smtp_users().get("domain-id", "smtp-user-id").await.unwrap();
        assert_eq!(transport.last_url(), url);

        let options = UpdateSmtpUserOptions {
            enabled: Some(false),
            ..Default::default()
        };
        client
            .smtp_users()
            .update("domain-id", "smtp-user-id", &options)
            .await
            .unwrap();
        assert_eq!(transport.last_request().method, Method::PUT);
        assert_eq!(transport.last_body_json(), json!({"enabled": false}));

        client.smtp_users().delete("domain-id", "smtp-user-id").await.unwrap();
        assert_eq!(transport.last_request().method, Method::DELETE);
        assert_eq!(transport.last_url(), url);
    }
}
