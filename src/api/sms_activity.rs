use super::sms::{SmsActivity, SmsMessageData};
use crate::client::{ApiResult, MailerSendClient};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const SMS_ACTIVITY_PATH: &str = "/sms-activity";
const SMS_MESSAGES_PATH: &str = "/sms-messages";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsActivityOptions {
    pub sms_number_id: String,
    /// Statuses such as `processed`, `queued`, `sent`, `delivered` or `failed`.
    pub status: Vec<String>,
    pub page: i32,
    /// Unix timestamp.
    pub date_from: i64,
    /// Unix timestamp.
    pub date_to: i64,
    pub limit: i32,
}

impl QueryParams for SmsActivityOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("sms_number_id", &self.sms_number_id)
            .omit_empty("status[]", &self.status)
            .omit_empty("page", &self.page)
            .omit_empty("date_from", &self.date_from)
            .omit_empty("date_to", &self.date_to)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SmsActivityService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsActivityService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &SmsActivityOptions) -> ApiResult<ListRoot<SmsActivity>> {
        self.client.get(SMS_ACTIVITY_PATH, Some(options)).await
    }

    /// Activity of one message, read from `GET /sms-messages/{sms_message_id}`.
    pub async fn get(&self, sms_message_id: &str) -> ApiResult<DataRoot<SmsMessageData>> {
        self.client
            .get::<_, ()>(&format!("{SMS_MESSAGES_PATH}/{sms_message_id}"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, make_client};

    #[tokio::test]
    async fn list_repeats_status_filter() {
        let body = r#"{"data":[{"from":"+18332647501","to":"+16203221059",
          "created_at":"2022-02-21T08:30:52.000000Z","status":"delivered",
          "sms_message_id":"62134a2d7de3253bf10d6642"}]}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let options = SmsActivityOptions {
            sms_number_id: "number-id".into(),
            status: vec!["queued".into(), "failed".into()],
            date_from: 1000,
            ..Default::default()
        };
        let (root, _) = client.sms_activity().list(&options).await.unwrap();
        assert_eq!(root.data[0].status, "delivered");
        assert!(root.data[0].created_at.is_some());
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/sms-activity?date_from=1000&sms_number_id=number-id&status%5B%5D=queued&status%5B%5D=failed"
        );
    }

    #[tokio::test]
    async fn get_reads_the_message_resource() {
        let body = r#"{"data":{
          "id":"62134a2d7de3253bf10d6642","from":"+18332647501","to":["+16203221059"],
          "text":"Hi","paused":false,"created_at":"2022-02-21T08:30:52.000000Z",
          "sms":[{"id":"62134a2d7de3253bf10d6643","from":"+18332647501","to":"+16203221059",
            "text":"Hi","status":"delivered","segment_count":1,"error_type":null,"error_description":null}],
          "sms_activity":[]}}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let (root, _) = client.sms_activity().get("62134a2d7de3253bf10d6642").await.unwrap();
        assert_eq!(root.data.sms_messages[0].segment_count, 1);
        assert!(root.data.sms_messages[0].error_type.is_null());
        assert_eq!(
            transport.last_url(),
            "https://api.mailersend.com/v1/sms-messages/62134a2d7de3253bf10d6642"
        );
    }
}
