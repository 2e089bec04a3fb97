use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{MailerSendClient, MailerSendError, Response};
use crate::domain::RawPhoneNumber;

const SMS_PATH: &str = "/sms";

/// A text message ready to be sent with [`SmsService::send`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sms {
    /// Sending number owned by the account, in E.164 form.
    pub from: String,
    pub to: Vec<RawPhoneNumber>,
    pub text: String,
}

impl Sms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_from(&mut self, from: impl Into<String>) -> &mut Self {
        self.from = from.into();
        self
    }

    pub fn set_to(&mut self, to: Vec<RawPhoneNumber>) -> &mut Self {
        self.to = to;
        self
    }

    /// Accepts a [`RawPhoneNumber`] or a parsed [`crate::domain::PhoneNumber`].
    pub fn add_to(&mut self, to: impl Into<RawPhoneNumber>) -> &mut Self {
        self.to.push(to.into());
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }
}

/// One delivery event of an SMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmsActivity {
    pub from: String,
    pub to: String,
    pub created_at: Option<DateTime<Utc>>,
    pub status: String,
    pub sms_message_id: String,
}

/// A sent SMS request with its per-recipient parts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmsMessageData {
    pub id: String,
    pub from: String,
    pub to: Vec<String>,
    pub text: String,
    pub paused: bool,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "sms")]
    pub sms_messages: Vec<SmsMessage>,
    pub sms_activity: Vec<SmsActivity>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmsMessage {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    pub status: String,
    pub segment_count: i64,
    pub error_type: serde_json::Value,
    pub error_description: serde_json::Value,
}

#[derive(Debug, Clone, Copy)]
pub struct SmsService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    /// `POST /sms`. The SMS message id is returned in the `X-SMS-Message-Id` header.
    pub async fn send(&self, sms: &Sms) -> Result<Response, MailerSendError> {
        self.client
            .send_json_no_content(Method::POST, SMS_PATH, Some(sms))
            .await
    }
}
