//! Suppression lists.
//!
//! Each list has its own record type. The record type selects the list for the generic
//! calls, e.g. `suppressions().list::<HardBounce>(&options)`.

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::domains::Domain;
use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const SUPPRESSIONS_PATH: &str = "/suppressions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuppressionKind {
    Blocklist,
    HardBounces,
    SpamComplaints,
    Unsubscribes,
}

impl SuppressionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blocklist => "blocklist",
            Self::HardBounces => "hard-bounces",
            Self::SpamComplaints => "spam-complaints",
            Self::Unsubscribes => "unsubscribes",
        }
    }

    fn path(self) -> String {
        format!("{SUPPRESSIONS_PATH}/{}", self.as_str())
    }
}

impl fmt::Display for SuppressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record type stored in one suppression list.
pub trait SuppressionRecord: DeserializeOwned {
    const KIND: SuppressionKind;
}

/// Address or pattern on the blocklist.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlocklistEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub pattern: String,
    pub domain: Option<Domain>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HardBounce {
    pub id: String,
    pub reason: String,
    pub created_at: Option<DateTime<Utc>>,
    pub recipient: SuppressedRecipient,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpamComplaint {
    pub id: String,
    pub recipient: SuppressedRecipient,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Unsubscribe {
    pub id: String,
    pub reason: String,
    pub readable_reason: String,
    pub recipient: SuppressedRecipient,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SuppressedRecipient {
    pub id: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<String>,
    pub domain: Option<Domain>,
}

impl SuppressionRecord for BlocklistEntry {
    const KIND: SuppressionKind = SuppressionKind::Blocklist;
}

impl SuppressionRecord for HardBounce {
    const KIND: SuppressionKind = SuppressionKind::HardBounces;
}

impl SuppressionRecord for SpamComplaint {
    const KIND: SuppressionKind = SuppressionKind::SpamComplaints;
}

impl SuppressionRecord for Unsubscribe {
    const KIND: SuppressionKind = SuppressionKind::Unsubscribes;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSuppressionOptions {
    pub domain_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListSuppressionOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("domain_id", &self.domain_id)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

/// Addresses and wildcard patterns to block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateBlocklistOptions {
    pub domain_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateSuppressionOptions {
    pub domain_id: String,
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteSuppressionOptions {
    pub domain_id: String,
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct DeleteAllSuppressions<'a> {
    domain_id: &'a str,
    all: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SuppressionsService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SuppressionsService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list<T: SuppressionRecord>(
        &self,
        options: &ListSuppressionOptions,
    ) -> ApiResult<ListRoot<T>> {
        self.client.get(&T::KIND.path(), Some(options)).await
    }

    /// Add recipients or patterns to the blocklist.
    pub async fn create_blocklist(
        &self,
        options: &CreateBlocklistOptions,
    ) -> ApiResult<DataRoot<Vec<BlocklistEntry>>> {
        self.client
            .send_json(Method::POST, &SuppressionKind::Blocklist.path(), Some(options))
            .await
    }

    /// Add recipients to the list holding `T`.
    pub async fn create<T: SuppressionRecord>(
        &self,
        options: &CreateSuppressionOptions,
    ) -> ApiResult<ListRoot<T>> {
        self.client
            .send_json(Method::POST, &T::KIND.path(), Some(options))
            .await
    }

    /// Remove the given entries; the `DELETE` carries a JSON body.
    pub async fn delete(
        &self,
        kind: SuppressionKind,
        options: &DeleteSuppressionOptions,
    ) -> Result<Response, MailerSendError> {
        self.client
            .send_json_no_content(Method::DELETE, &kind.path(), Some(options))
            .await
    }

    /// Empty the list for one domain.
    pub async fn delete_all(
        &self,
        kind: SuppressionKind,
        domain_id: &str,
    ) -> Result<Response, MailerSendError> {
        let payload = DeleteAllSuppressions {
            domain_id,
            all: true,
        };
        self.client
            .send_json_no_content(Method::DELETE, &kind.path(), Some(&payload))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, make_client};
    use serde_json::json;

    #[test]
    fn kinds_map_to_path_segments() {
        assert_eq!(SuppressionKind::HardBounces.to_string(), "hard-bounces");
        assert_eq!(SuppressionKind::SpamComplaints.as_str(), "spam-complaints");
        assert_eq!(SuppressionKind::Unsubscribes.path(), "/suppressions/unsubscribes");
    }

    #[tokio::test]
    async fn list_picks_the_list_from_the_record_type() {
        let body = r#"{"data":[{"id":"u1","reason":"NO_LONGER_WANT","readable_reason":"I no longer want to receive these emails",
          "recipient":{"id":"r1","email":"a@b.com","created_at":"2022-01-01T12:00:00.000000Z","deleted_at":""},
          "created_at":"2022-01-01T12:00:00.000000Z"}]}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let options = ListSuppressionOptions {
            domain_id: "domain-id".into(),
            limit: 25,
            ..Default::default()
        };
        let (root, _) = client.suppressions().list::<Unsubscribe>(&options).await.unwrap();
        assert_eq!(root.data[0].recipient.email, "a@b.com");
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/suppressions/unsubscribes?domain_id=domain-id&limit=25"
        );
    }

    #[tokio::test]
    async fn create_blocklist_omits_empty_patterns() {
        let body = r#"{"data":[{"id":"b1","type":"exact","pattern":"a@b.com","created_at":"2022-01-01T12:00:00.000000Z","updated_at":"2022-01-01T12:00:00.000000Z"}]}"#;
        let transport = FakeTransport::new(201, body);
        let client = make_client(transport.clone());

        let options = CreateBlocklistOptions {
            domain_id: "domain-id".into(),
            recipients: vec!["a@b.com".into()],
            patterns: Vec::new(),
        };
        let (root, _) = client.suppressions().create_blocklist(&options).await.unwrap();
        assert_eq!(root.data[0].kind, "exact");
        assert_eq!(
            transport.last_body_json(),
            json!({"domain_id": "domain-id", "recipients": ["a@b.com"]})
        );
        assert!(transport.last_url().ends_with("/suppressions/blocklist"));
    }

    #[tokio::test]
    async fn create_posts_to_the_typed_list() {
        let body = r#"{"data":[{"id":"s1","recipient":{"id":"r1","email":"a@b.com"},"created_at":"2022-01-01T12:00:00.000000Z"}]}"#;
        let transport = FakeTransport::new(201, body);
        let client = make_client(transport.clone());

        let options = CreateSuppressionOptions {
            domain_id: "domain-id".into(),
            recipients: vec!["a@b.com".into()],
        };
        let (root, _) = client
            .suppressions()
            .create::<SpamComplaint>(&options)
            .await
            .unwrap();
        assert_eq!(root.data[0].recipient.id, "r1");
        assert!(transport.last_url().ends_with("/suppressions/spam-complaints"));
    }

    #[tokio::test]
    async fn delete_sends_ids_and_delete_all_sends_all_true() {
        let transport = FakeTransport::new(204, "");
        let client = make_client(transport.clone());

        let options = DeleteSuppressionOptions {
            domain_id: "domain-id".into(),
            ids: vec!["b1".into(), "b2".into()],
        };
        client
            .suppressions()
            .delete(SuppressionKind::Blocklist, &options)
            .await
            .unwrap();
        assert_eq!(transport.last_request().method, Method::DELETE);
        assert_eq!(
            transport.last_body_json(),
            json!({"domain_id": "domain-id", "ids": ["b1", "b2"]})
        );

        client
            .suppressions()
            .delete_all(SuppressionKind::HardBounces, "domain-id")
            .await
            .unwrap();
        assert_eq!(
            transport.last_body_json(),
            json!({"domain_id": "domain-id", "all": true})
        );
        assert!(transport.last_url().ends_with("/suppressions/hard-bounces"));
    }
}
