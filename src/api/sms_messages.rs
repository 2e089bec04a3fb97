use super::sms::SmsMessageData;
use crate::client::{ApiResult, MailerSendClient};
use crate::domain::{DataRoot, ListRoot};
use crate::transport::{QueryEncoder, QueryParams};

const SMS_MESSAGES_PATH: &str = "/sms-messages";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSmsMessageOptions {
    pub page: i32,
    pub limit: i32,
}

impl QueryParams for ListSmsMessageOptions {
    fn encode_query(&self, query: &mut QueryEncoder) {
        query
            .omit_empty("page", &self.page)
            .omit_empty("limit", &self.limit);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SmsMessagesService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> SmsMessagesService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListSmsMessageOptions,
    ) -> ApiResult<ListRoot<SmsMessageData>> {
        self.client.get(SMS_MESSAGES_PATH, Some(options)).await
    }

    pub async fn get(&self, sms_message_id: &str) -> ApiResult<DataRoot<SmsMessageData>> {
        self.client
            .get::<_, ()>(&format!("{SMS_MESSAGES_PATH}/{sms_message_id}"), None)
            .await
    }
}
