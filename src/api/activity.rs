use serde::Deserialize;

use crate::client::{ApiResult, MailerSendClient};
use crate::domain::ListRoot;
use crate::transport::{QueryEncoder, QueryParams};

const ACTIVITY_PATH: &str = "/activity";

/// One email activity record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub email: ActivityEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActivityEmail {
    pub id: String,
    pub from: String,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub status: String,
    pub tags: serde_json::Value,
    pub created_at: String,
    pub updated_at: String,
    pub recipient: ActivityRecipient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActivityRecipient {
    pub id: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

/// Options for [`ActivityService::list`]. `domain_id` goes into the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityOptions {
    pub domain_id: String,
    pub page: i32,
    /// Unix timestamp.
    pub date_from: i64,
    /// Unix timestamp.
    pub date_to: i64,
    pub limit: i32,
    /// Event names such as `sent` or `opened`.
    pub event: Vec<String>,
}

impl QueryParams for ActivityOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("page", &self.page)
            .omit_empty("date_from", &self.date_from)
            .omit_empty("date_to", &self.date_to)
            .omit_empty("limit", &self.limit)
            .omit_empty("event[]", &self.event);
    }
}

/// `GET /activity/{domain_id}`.
#[derive(Debug, Clone, Copy)]
pub struct ActivityService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> ActivityService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ActivityOptions) -> ApiResult<ListRoot<Activity>> {
        let path = format!("{ACTIVITY_PATH}/{}", options.domain_id);
        self.client.get(&path, Some(options)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, make_client};

    #[tokio::test]
    async fn list_puts_domain_in_path_and_dates_in_query() {
        let transport = FakeTransport::new(200, r#"{"data":[]}"#);
        let client = make_client(transport.clone());

        let options = ActivityOptions {
            domain_id: "domain-id".into(),
            date_from: 1000,
            date_to: 2000,
            ..Default::default()
        };
        let (root, _) = client.activity().list(&options).await.unwrap();
        assert!(root.data.is_empty());
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/activity/domain-id?date_from=1000&date_to=2000"
        );
    }

    #[tokio::test]
    async fn list_decodes_activity_records() {
        let body = r#"{
          "data": [{
            "id": "5ee8a5f1bc2bf26c3d1b9fe8",
            "created_at": "2020-06-16T10:59:29.000000Z",
            "updated_at": "2020-06-16T10:59:29.000000Z",
            "type": "opened",
            "email": {
              "id": "5ee8a5f1bc2bf26c3d1b9fe7",
              "from": "test@example.com",
              "subject": "Test",
              "text": null,
              "html": "<p>hi</p>",
              "status": "delivered",
              "tags": null,
              "created_at": "2020-06-16T10:59:29.000000Z",
              "updated_at": "2020-06-16T10:59:29.000000Z",
              "recipient": {
                "id": "5ee8a5f1bc2bf26c3d1b9fe6",
                "email": "recipient@example.com",
                "created_at": "2020-06-16T10:59:29.000000Z",
                "updated_at": "2020-06-16T10:59:29.000000Z",
                "deleted_at": null
              }
            }
          }],
          "links": {"first": "https://api.mailersend.com/v1/activity/domain-id?page=1", "next": null},
          "meta": {"current_page": 1, "per_page": "25", "path": "https://api.mailersend.com/v1/activity/domain-id"}
        }"#;
        let client = make_client(FakeTransport::new(200, body));

        let options = ActivityOptions {
            domain_id: "domain-id".into(),
            event: vec!["opened".into()],
            ..Default::default()
        };
        let (root, _) = client.activity().list(&options).await.unwrap();
        let activity = &root.data[0];
        assert_eq!(activity.kind, "opened");
        assert_eq!(activity.email.text, None);
        assert_eq!(activity.email.recipient.email, "recipient@example.com");
        assert!(root.links.next.is_none());
        assert_eq!(
            root.meta.per_page.as_ref().and_then(|n| n.as_i64()),
            Some(25)
        );
    }
}
