use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, Filter, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const SMS_INBOUNDS_PATH: &str = "/sms-inbounds";

/// Forwarding rule for SMS received on a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmsInbound {
    pub id: String,
    pub name: String,
    pub filter: Filter,
    pub forward_url: String,
    pub enabled: bool,
    pub secret: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSmsInboundOptions {
    pub sms_number_id: String,
    pub enabled: Option<bool>,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListSmsInboundOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("sms_number_id", &self.sms_number_id)
            .omit_empty("enabled", &self.enabled)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateSmsInboundOptions {
    pub sms_number_id: String,
    pub name: String,
    pub forward_url: String,
    pub filter: Filter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Changes applied by [`SmsInboundService::update`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSmsInboundOptions {
    #[serde(skip)]
    pub inbound_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sms_number_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub forward_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
pub struct SmsInboundService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsInboundService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListSmsInboundOptions) -> ApiResult<ListRoot<SmsInbound>> {
        self.client.get(SMS_INBOUNDS_PATH, Some(options)).await
    }

    pub async fn get(&self, inbound_id: &str) -> ApiResult<DataRoot<SmsInbound>> {
        self.client
            .get::<_, ()>(&format!("{SMS_INBOUNDS_PATH}/{inbound_id}"), None)
            .await
    }

    pub async fn create(
        &self,
        options: &CreateSmsInboundOptions,
    ) -> ApiResult<DataRoot<SmsInbound>> {
        self.client
            .send_json(Method::POST, SMS_INBOUNDS_PATH, Some(options))
            .await
    }

    pub async fn update(
        &self,
        options: &UpdateSmsInboundOptions,
    ) -> ApiResult<DataRoot<SmsInbound>> {
        let path = format!("{SMS_INBOUNDS_PATH}/{}", options.inbound_id);
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(&self, inbound_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{SMS_INBOUNDS_PATH}/{inbound_id}"))
            .await
    }
}
