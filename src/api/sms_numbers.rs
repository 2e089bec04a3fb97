use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResult, MailerSendClient, MailerSendError, Response};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const SMS_NUMBERS_PATH: &str = "/sms-numbers";

/// A phone number owned by the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmsNumber {
    pub id: String,
    pub telephone_number: String,
    pub paused: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSmsNumberOptions {
    pub paused: Option<bool>,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListSmsNumberOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("paused", &self.paused)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SmsNumberSettingOptions {
    #[serde(skip)]
    pub number_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
pub struct SmsNumbersService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsNumbersService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListSmsNumberOptions) -> ApiResult<ListRoot<SmsNumber>> {
        self.client.get(SMS_NUMBERS_PATH, Some(options)).await
    }

    pub async fn get(&self, number_id: &str) -> ApiResult<DataRoot<SmsNumber>> {
        self.client
            .get::<_, ()>(&format!("{SMS_NUMBERS_PATH}/{number_id}"), None)
            .await
    }

    /// Pause or resume a number.
    pub async fn update(
        &self,
        options: &SmsNumberSettingOptions,
    ) -> ApiResult<DataRoot<SmsNumber>> {
        let path = format!("{SMS_NUMBERS_PATH}/{}", options.number_id);
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }

    pub async fn delete(&self, number_id: &str) -> Result<Response, MailerSendError> {
        self.client
            .delete(&format!("{SMS_NUMBERS_PATH}/{number_id}"))
            .await
    }
}
