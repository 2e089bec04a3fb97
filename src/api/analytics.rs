use serde::Deserialize;

use crate::client::{ApiResult, MailerSendClient};
use crate::domain::{DataRoot, LooseNumber};
use crate::transport::{QueryEncoder, QueryParams};

const ANALYTICS_PATH: &str = "/analytics";

/// Daily (or weekly, monthly, yearly) activity counts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsData {
    pub date_from: Option<LooseNumber>,
    pub date_to: Option<LooseNumber>,
    pub group_by: String,
    pub stats: Vec<AnalyticsStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyticsStats {
    pub date: String,
    pub queued: i64,
    pub sent: i64,
    pub delivered: i64,
    pub soft_bounced: i64,
    pub hard_bounced: i64,
    pub junk: i64,
    pub opened: i64,
    pub clicked: i64,
    pub unsubscribed: i64,
    pub spam_complaints: i64,
}

/// Opens grouped by country, user agent or reading environment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpensData {
    pub date_from: Option<LooseNumber>,
    pub date_to: Option<LooseNumber>,
    pub stats: Vec<OpenStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpenStats {
    pub name: String,
    pub count: i64,
}

/// Options shared by every analytics endpoint.
///
/// `date_from` and `date_to` are always sent; the API requires both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsOptions {
    pub domain_id: String,
    pub recipient_id: Vec<i64>,
    /// Unix timestamp.
    pub date_from: i64,
    /// Unix timestamp.
    pub date_to: i64,
    /// `days`, `weeks`, `months` or `years`.
    pub group_by: String,
    pub tags: Vec<String>,
    pub event: Vec<String>,
}

impl QueryParams for AnalyticsOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("domain_id", &self.domain_id)
            .omit_empty("recipient_id", &self.recipient_id)
            .always("date_from", &self.date_from)
            .always("date_to", &self.date_to)
            .omit_empty("group_by", &self.group_by)
            .omit_empty("tags[]", &self.tags)
            .omit_empty("event[]", &self.event);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnalyticsService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> AnalyticsService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    /// `GET /analytics/date`.
    pub async fn activity_by_date(
        &self,
        options: &AnalyticsOptions,
    ) -> ApiResult<DataRoot<AnalyticsData>> {
        self.client
            .get(&format!("{ANALYTICS_PATH}/date"), Some(options))
            .await
    }

    /// `GET /analytics/country`.
    pub async fn opens_by_country(
        &self,
        options: &AnalyticsOptions,
    ) -> ApiResult<DataRoot<OpensData>> {
        self.opens("country", options).await
    }

    /// `GET /analytics/ua-name`.
    pub async fn opens_by_user_agent(
        &self,
        options: &AnalyticsOptions,
    ) -> ApiResult<DataRoot<OpensData>> {
        self.opens("ua-name", options).await
    }

    /// `GET /analytics/ua-type`.
    pub async fn opens_by_reading_environment(
        &self,
        options: &AnalyticsOptions,
    ) -> ApiResult<DataRoot<OpensData>> {
        self.opens("ua-type", options).await
    }

    async fn opens(
        &self,
        group: &str,
        options: &AnalyticsOptions,
    ) -> ApiResult<DataRoot<OpensData>> {
        self.client
            .get(&format!("{ANALYTICS_PATH}/{group}"), Some(options))
            .await
    }
}
