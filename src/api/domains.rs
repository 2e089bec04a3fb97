use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot, LooseNumber};
use crate::transport::{QueryEncoder, QueryParams};

const DOMAINS_PATH: &str = "/domains";

/// A sending domain. Also embedded in messages, templates, webhooks and suppressions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub dkim: Option<bool>,
    pub spf: Option<bool>,
    pub tracking: Option<bool>,
    pub is_verified: bool,
    pub is_cname_verified: Option<bool>,
    pub is_dns_active: Option<bool>,
    pub is_cname_active: Option<bool>,
    pub is_tracking_allowed: Option<bool>,
    pub has_not_queued_messages: Option<bool>,
    pub not_queued_messages_count: Option<i64>,
    pub domain_settings: Option<DomainSettings>,
    pub totals: Option<DomainTotals>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainSettings {
    pub send_paused: bool,
    pub track_clicks: bool,
    pub track_opens: bool,
    pub track_unsubscribe: bool,
    pub track_unsubscribe_html: Option<String>,
    pub track_unsubscribe_html_enabled: bool,
    pub track_unsubscribe_plain: Option<String>,
    pub track_unsubscribe_plain_enabled: bool,
    pub track_content: bool,
    pub custom_tracking_enabled: bool,
    pub custom_tracking_subdomain: Option<String>,
    pub return_path_subdomain: Option<String>,
    pub inbound_routing_enabled: bool,
    pub inbound_routing_subdomain: Option<String>,
    pub ignore_duplicated_recipients: bool,
    pub precedence_bulk: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainTotals {
    pub sent: i64,
    pub delivered: i64,
    pub hard_bounced: i64,
    pub soft_bounced: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DnsRecord {
    pub hostname: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MxRecord {
    pub hostname: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub priority: Option<LooseNumber>,
}

/// DNS records to publish for a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DnsRecords {
    pub id: String,
    pub spf: DnsRecord,
    pub dkim: DnsRecord,
    pub return_path: DnsRecord,
    pub custom_tracking: DnsRecord,
    pub inbound_routing: MxRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainVerification {
    pub dkim: bool,
    pub spf: bool,
    pub mx: bool,
    pub tracking: bool,
    pub cname: bool,
    pub rp_cname: bool,
}

/// Body of `GET /domains/{id}/verify`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainVerificationResponse {
    pub message: String,
    pub data: DomainVerification,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainRecipient {
    pub id: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDomainOptions {
    pub page: i32,
    pub limit: i32,
    pub verified: Option<bool>,
}

impl QueryParams for ListDomainOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit)
            .omit_empty("verified", &self.verified);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDomainOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_path_subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tracking_subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_routing_subdomain: Option<String>,
}

/// Settings changed by [`DomainsService::update`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainSettingOptions {
    #[serde(skip)]
    pub domain_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_clicks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_unsubscribe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_unsubscribe_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_unsubscribe_plain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tracking_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tracking_subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_duplicated_recipients: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence_bulk: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainRecipientsOptions {
    pub domain_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for DomainRecipientsOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DomainsService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> DomainsService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListDomainOptions) -> ApiResult<ListRoot<Domain>> {
        self.client.get(DOMAINS_PATH, Some(options)).await
    }

    pub async fn get(&self, domain_id: &str) -> ApiResult<DataRoot<Domain>> {
        self.client
            .get::<_, ()>(&format!("{DOMAINS_PATH}/{domain_id}"), None)
            .await
    }

    pub async fn create(&self, options: &CreateDomainOptions) -> ApiResult<DataRoot<Domain>> {
        self.client
            .send_json(Method::POST, DOMAINS_PATH, Some(options))
            .await
    }

    /// `PUT /domains/{domain_id}/settings`.
    pub async fn update(&self, options: &DomainSettingOptions) -> ApiResult<DataRoot<Domain>> {
        let path = format!("{DOMAINS_PATH}/{}/settings", options.domain_id);
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(&self, domain_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{DOMAINS_PATH}/{domain_id}"))
            .await
    }

    pub async fn dns_records(&self, domain_id: &str) -> ApiResult<DataRoot<DnsRecords>> {
        self.client
            .get::<_, ()>(&format!("{DOMAINS_PATH}/{domain_id}/dns-records"), None)
            .await
    }

    pub async fn verify(&self, domain_id: &str) -> ApiResult<DomainVerificationResponse> {
        self.client
            .get::<_, ()>(&format!("{DOMAINS_PATH}/{domain_id}/verify"), None)
            .await
    }

    /// Recipients that received mail from the domain.
    pub async fn recipients(
        &self,
        options: &DomainRecipientsOptions,
    ) -> ApiResult<ListRoot<DomainRecipient>> {
        let path = format!("{DOMAINS_PATH}/{}/recipients", options.domain_id);
        self.client.get(&path, Some(options)).await
    }
}
