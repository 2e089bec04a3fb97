use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::sms::SmsMessage;
use crate::client::{ApiResult, MailerSendClient};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const SMS_RECIPIENTS_PATH: &str = "/sms-recipients";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmsRecipient {
    pub id: String,
    pub number: String,
    /// `active` or `opt_out`.
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A recipient with the messages sent to it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmsRecipientDetail {
    pub id: String,
    pub number: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub sms: Vec<SmsMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSmsRecipientOptions {
    pub status: String,
    pub sms_number_id: String,
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListSmsRecipientOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("status", &self.status)
            .omit_empty("sms_number_id", &self.sms_number_id)
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SmsRecipientSettingOptions {
    #[serde(skip)]
    pub recipient_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

#[derive(Debug, Clone, Copy)]
pub struct SmsRecipientsService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsRecipientsService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListSmsRecipientOptions,
    ) -> ApiResult<ListRoot<SmsRecipient>> {
        self.client.get(SMS_RECIPIENTS_PATH, Some(options)).await
    }

    pub async fn get(&self, recipient_id: &str) -> ApiResult<DataRoot<SmsRecipientDetail>> {
        self.client
            .get::<_, ()>(&format!("{SMS_RECIPIENTS_PATH}/{recipient_id}"), None)
            .await
    }

    pub async fn update(
        &self,
        options: &SmsRecipientSettingOptions,
    ) -> ApiResult<DataRoot<SmsRecipient>> {
        let path = format!("{SMS_RECIPIENTS_PATH}/{}", options.recipient_id);
        self.client.send_json(Method::PUT, &path, Some(options)).await
    }
}
