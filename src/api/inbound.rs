use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, Filter, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const INBOUND_PATH: &str = "/inbound";

/// An inbound route.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Inbound {
    pub id: String,
    pub name: String,
    pub address: String,
    pub domain: String,
    pub dns_checked_at: serde_json::Value,
    pub enabled: bool,
    pub filters: Vec<InboundFilter>,
    pub forwards: Vec<InboundForward>,
    pub priority: i64,
    #[serde(rename = "mxValues")]
    pub mx_values: MxValues,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InboundFilter {
    #[serde(rename = "type")]
    pub kind: String,
    pub key: serde_json::Value,
    pub comparer: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InboundForward {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MxValues {
    pub priority: i64,
    pub target: String,
}

/// `domain_id` is always sent, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInboundOptions {
    pub domain_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListInboundOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .always("domain_id", &self.domain_id)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchFilter {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatchFilter {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Forward {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Body of create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InboundOptions {
    pub domain_id: String,
    pub name: String,
    pub domain_enabled: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inbound_domain: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inbound_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inbound_subdomain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_filter: Option<MatchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_filter: Option<CatchFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forwards: Vec<Forward>,
}

#[derive(Debug, Clone, Copy)]
pub struct InboundService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> InboundService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListInboundOptions) -> ApiResult<ListRoot<Inbound>> {
        self.client.get(INBOUND_PATH, Some(options)).await
    }

    pub async fn get(&self, inbound_id: &str) -> ApiResult<DataRoot<Inbound>> {
        self.client
            .get::<_, ()>(&format!("{INBOUND_PATH}/{inbound_id}"), None)
            .await
    }

    pub async fn create(&self, options: &InboundOptions) -> ApiResult<DataRoot<Inbound>> {
        self.client
            .send_json(Method::POST, INBOUND_PATH, Some(options))
            .await
    }

    pub async fn update(
        &self,
        inbound_id: &str,
        options: &InboundOptions,
    ) -> ApiResult<DataRoot<Inbound>> {
        let path = format!("{INBOUND_PATH}/{inbound_id}");
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(&self, inbound_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{INBOUND_PATH}/{inbound_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, make_client};
    use serde_json::json;

    const INBOUND: &str = r#"{"data":{
      "id": "0z76k5jg0o3l8qyo",
      "name": "Example",
      "address": "example@inbound.mailersend.net",
      "domain": "example.com",
      "dns_checked_at": null,
      "enabled": true,
      "filters": [{"type": "catch_recipient", "key": null, "comparer": "equal", "value": "test"}],
      "forwards": [{"id": "jy7zpl9z0q5vx6ki", "type": "webhook", "value": "https://example.com", "secret": "s3cr3t"}],
      "priority": 0,
      "mxValues": {"priority": 10, "target": "inbound.mailersend.net"}
    }}"#;

    #[tokio::test]
    async fn create_sends_filters_and_forwards() {
        let transport = FakeTransport::new(201, INBOUND);
        let client = make_client(transport.clone());

        let options = InboundOptions {
            domain_id: "domain-id".into(),
            name: "Example".into(),
            domain_enabled: false,
            match_filter: Some(MatchFilter {
                kind: "match_all".into(),
            }),
            catch_filter: Some(CatchFilter {
                kind: "catch_recipient".into(),
                filters: vec![Filter::new("equal", "test")],
            }),
            forwards: vec![Forward {
                kind: "webhook".into(),
                value: "https://example.com".into(),
            }],
            ..Default::default()
        };
        let (root, _) = client.inbound().create(&options).await.unwrap();
        assert_eq!(root.data.mx_values.target, "inbound.mailersend.net");
        assert_eq!(root.data.forwards[0].secret, "s3cr3t");
        assert!(root.data.filters[0].key.is_null());

        assert_eq!(
            transport.last_body_json(),
            json!({
                "domain_id": "domain-id",
                "name": "Example",
                "domain_enabled": false,
                "match_filter": {"type": "match_all"},
                "catch_filter": {"type": "catch_recipient", "filters": [{"comparer": "equal", "value": "test"}]},
                "forwards": [{"type": "webhook", "value": "https://example.com"}]
            })
        );
    }

    #[tokio::test]
    async fn update_and_delete_target_the_route() {
        let transport = FakeTransport::new(200, INBOUND);
        let client = make_client(transport.clone());

        client
            .inbound()
            .update("0z76k5jg0o3l8qyo", &InboundOptions::default())
            .await
            .unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url.as_str(),
            "https://api.mailersend.com/v1/inbound/0z76k5jg0o3l8qyo"
        );

        client.inbound().delete("0z76k5jg0o3l8qyo").await.unwrap();
        assert_eq!(transport.last_request().method, Method::DELETE);
    }

    #[tokio::test]
    async fn list_always_sends_domain_id() {
        let transport = FakeTransport::new(200, r#"{"data":[]}"#);
        let client = make_client(transport.clone());

        let options = ListInboundOptions {
            domain_id: "domain-id".into(),
            page: 2,
            ..Default::default()
        };
        client.inbound().list(&options).await.unwrap();
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/inbound?domain_id=domain-id&page=2"
        );
    }
}
