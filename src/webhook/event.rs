use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// Event name carried in the `type` field of a webhook call and in webhook subscriptions.
///
/// Names this crate does not know are kept in [`WebhookEventType::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WebhookEventType {
    ActivitySent,
    ActivityDelivered,
    ActivitySoftBounced,
    ActivityHardBounced,
    ActivityOpened,
    ActivityOpenedUnique,
    ActivityClicked,
    ActivityClickedUnique,
    ActivityUnsubscribed,
    ActivitySpamComplaint,
    ActivitySurveyOpened,
    ActivitySurveySubmitted,
    SenderIdentityVerified,
    MaintenanceStart,
    MaintenanceEnd,
    InboundForwardFailed,
    Unknown(String),
}

impl WebhookEventType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::ActivitySent => "activity.sent",
            Self::ActivityDelivered => "activity.delivered",
            Self::ActivitySoftBounced => "activity.soft_bounced",
            Self::ActivityHardBounced => "activity.hard_bounced",
            Self::ActivityOpened => "activity.opened",
            Self::ActivityOpenedUnique => "activity.opened_unique",
            Self::ActivityClicked => "activity.clicked",
            Self::ActivityClickedUnique => "activity.clicked_unique",
            Self::ActivityUnsubscribed => "activity.unsubscribed",
            Self::ActivitySpamComplaint => "activity.spam_complaint",
            Self::ActivitySurveyOpened => "activity.survey_opened",
            Self::ActivitySurveySubmitted => "activity.survey_submitted",
            Self::SenderIdentityVerified => "sender_identity.verified",
            Self::MaintenanceStart => "maintenance.start",
            Self::MaintenanceEnd => "maintenance.end",
            Self::InboundForwardFailed => "inbound_forward.failed",
            Self::Unknown(name) => name,
        }
    }

    /// `true` for the `activity.*` family.
    pub fn is_activity(&self) -> bool {
        matches!(
            self,
            Self::ActivitySent
                | Self::ActivityDelivered
                | Self::ActivitySoftBounced
                | Self::ActivityHardBounced
                | Self::ActivityOpened
                | Self::ActivityOpenedUnique
                | Self::ActivityClicked
                | Self::ActivityClickedUnique
                | Self::ActivityUnsubscribed
                | Self::ActivitySpamComplaint
                | Self::ActivitySurveyOpened
                | Self::ActivitySurveySubmitted
        )
    }
}

impl From<&str> for WebhookEventType {
    fn from(value: &str) -> Self {
        match value {
            "activity.sent" => Self::ActivitySent,
            "activity.delivered" => Self::ActivityDelivered,
            "activity.soft_bounced" => Self::ActivitySoftBounced,
            "activity.hard_bounced" => Self::ActivityHardBounced,
            "activity.opened" => Self::ActivityOpened,
            "activity.opened_unique" => Self::ActivityOpenedUnique,
            "activity.clicked" => Self::ActivityClicked,
            "activity.clicked_unique" => Self::ActivityClickedUnique,
            "activity.unsubscribed" => Self::ActivityUnsubscribed,
            "activity.spam_complaint" => Self::ActivitySpamComplaint,
            "activity.survey_opened" => Self::ActivitySurveyOpened,
            "activity.survey_submitted" => Self::ActivitySurveySubmitted,
            "sender_identity.verified" => Self::SenderIdentityVerified,
            "maintenance.start" => Self::MaintenanceStart,
            "maintenance.end" => Self::MaintenanceEnd,
            "inbound_forward.failed" => Self::InboundForwardFailed,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl FromStr for WebhookEventType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WebhookEventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WebhookEventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from(name.as_str()))
    }
}

/// A verified webhook call. `data` stays raw until [`decode_data`](Self::decode_data) or
/// [`data_as`](Self::data_as) is called; a call without `data` decodes as JSON `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub kind: WebhookEventType,
    #[serde(default)]
    pub domain_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub webhook_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
}

impl WebhookEvent {
    /// Decode `data` according to the event type.
    pub fn decode_data(&self) -> Result<WebhookEventData, serde_json::Error> {
        if self.kind.is_activity() {
            return self.data_as().map(WebhookEventData::Activity);
        }
        let value = self.data_as::<serde_json::Value>()?;
        Ok(match self.kind {
            WebhookEventType::SenderIdentityVerified => WebhookEventData::SenderIdentity(value),
            WebhookEventType::MaintenanceStart | WebhookEventType::MaintenanceEnd => {
                WebhookEventData::Maintenance(value)
            }
            WebhookEventType::InboundForwardFailed => WebhookEventData::InboundForwardFailed(value),
            _ => WebhookEventData::Other(value),
        })
    }

    /// Decode `data` into a caller-chosen type.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.data.as_deref().map_or("null", RawValue::get))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEventData {
    Activity(ActivityEventData),
    SenderIdentity(serde_json::Value),
    Maintenance(serde_json::Value),
    InboundForwardFailed(serde_json::Value),
    Other(serde_json::Value),
}

/// Payload of `activity.*` events.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActivityEventData {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: Option<DateTime<Utc>>,
    pub email: ActivityEventEmail,
    pub morph: serde_json::Value,
    pub template_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActivityEventEmail {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub from: String,
    pub subject: String,
    pub status: String,
    pub tags: serde_json::Value,
    pub headers: serde_json::Value,
    pub message: ActivityEventMessage,
    pub recipient: ActivityEventRecipient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActivityEventMessage {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActivityEventRecipient {
    pub id: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}
