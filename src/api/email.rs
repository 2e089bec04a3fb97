use serde::{Deserialize, Serialize};

use crate::client::{MailerSendClient, MailerSendError, Response};

const EMAIL_PATH: &str = "/email";

/// Name and address of a sender or recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Recipient {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub email: String,
}

impl Recipient {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            email: email.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Template data for one recipient.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Personalization {
    pub email: String,
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Custom header added to the outgoing email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Inline,
    Attachment,
}

/// File attached to the email. `content` is base64 encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Attachment {
    pub content: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
    /// Content id referenced from the HTML body of inline attachments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    pub track_clicks: bool,
    pub track_opens: bool,
    pub track_content: bool,
}

/// An email ready to be sent with [`EmailService::send`] or in bulk.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    #[serde(rename = "to")]
    pub recipients: Vec<Recipient>,
    pub from: Recipient,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<Recipient>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<Recipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Unix timestamp for scheduled delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub personalization: Vec<Personalization>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_unsubscribe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence_bulk: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_from(&mut self, from: Recipient) -> &mut Self {
        self.from = from;
        self
    }

    pub fn set_recipients(&mut self, recipients: Vec<Recipient>) -> &mut Self {
        self.recipients = recipients;
        self
    }

    pub fn set_cc(&mut self, cc: Vec<Recipient>) -> &mut Self {
        self.cc = cc;
        self
    }

    pub fn set_bcc(&mut self, bcc: Vec<Recipient>) -> &mut Self {
        self.bcc = bcc;
        self
    }

    pub fn set_reply_to(&mut self, reply_to: Recipient) -> &mut Self {
        self.reply_to = Some(reply_to);
        self
    }

    pub fn set_in_reply_to(&mut self, in_reply_to: impl Into<String>) -> &mut Self {
        self.in_reply_to = Some(in_reply_to.into());
        self
    }

    /// Required unless a template is used.
    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn set_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.html = Some(html.into());
        self
    }

    pub fn set_template_id(&mut self, template_id: impl Into<String>) -> &mut Self {
        self.template_id = Some(template_id.into());
        self
    }

    pub fn set_personalization(&mut self, personalization: Vec<Personalization>) -> &mut Self {
        self.personalization = personalization;
        self
    }

    pub fn set_headers(&mut self, headers: Vec<Header>) -> &mut Self {
        self.headers = headers;
        self
    }

    /// Custom `List-Unsubscribe` header value (Professional and Enterprise plans).
    pub fn set_list_unsubscribe(&mut self, list_unsubscribe: impl Into<String>) -> &mut Self {
        self.list_unsubscribe = Some(list_unsubscribe.into());
        self
    }

    pub fn set_tags(&mut self, tags: Vec<String>) -> &mut Self {
        self.tags = tags;
        self
    }

    pub fn add_attachment(&mut self, attachment: Attachment) -> &mut Self {
        self.attachments.push(attachment);
        self
    }

    pub fn set_send_at(&mut self, send_at: i64) -> &mut Self {
        self.send_at = Some(send_at);
        self
    }

    pub fn set_precedence_bulk(&mut self, precedence_bulk: bool) -> &mut Self {
        self.precedence_bulk = Some(precedence_bulk);
        self
    }

    pub fn set_references(&mut self, references: Vec<String>) -> &mut Self {
        self.references = references;
        self
    }

    pub fn add_reference(&mut self, reference: impl Into<String>) -> &mut Self {
        self.references.push(reference.into());
        self
    }

    pub fn set_settings(&mut self, settings: Settings) -> &mut Self {
        self.settings = Some(settings);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EmailService<'a> {
    client: &'a MailerSendClient,
}

impl<'a> EmailService<'a> {
    pub(crate) fn new(client: &'a MailerSendClient) -> Self {
        Self { client }
    }

    /// `POST /email`.
    ///
    /// MailerSend answers `202 Accepted` with an empty body; the message id is available
    /// through [`Response::message_id`].
    pub async fn send(&self, message: &Message) -> Result<Response, MailerSendError> {
        self.client
            .send_json_no_content(reqwest::Method::POST, EMAIL_PATH, Some(message))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CancelReason;
    use crate::client::testing::{FakeTransport, make_client};
    use serde_json::json;
    use tokio_util::sync::CancellationToken;

    fn sample() -> Message {
        let mut message = Message::new();
        message
            .set_from(Recipient::new("info@domain.com").with_name("Your Name"))
            .set_recipients(vec![Recipient::new("recipient@email.com").with_name("Recipient")])
            .set_subject("Subject")
            .set_html("Greetings from the team, you got this message through MailerSend.")
            .set_text("Greetings from the team, you got this message through MailerSend.");
        message
    }

    #[test]
    fn minimal_message_omits_unset_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            json!({
                "to": [{"name": "Recipient", "email": "recipient@email.com"}],
                "from": {"name": "Your Name", "email": "info@domain.com"},
                "subject": "Subject",
                "text": "Greetings from the team, you got this message through MailerSend.",
                "html": "Greetings from the team, you got this message through MailerSend."
            })
        );
    }

    #[test]
    fn setters_fill_the_wire_fields() {
        let mut message = sample();
        let mut data = serde_json::Map::new();
        data.insert("var".into(), json!("value"));
        message
            .set_cc(vec![Recipient::new("cc@email.com")])
            .set_reply_to(Recipient::new("reply@domain.com"))
            .set_template_id("jpzkmgq7k7l059vx")
            .set_personalization(vec![Personalization {
                email: "recipient@email.com".into(),
                data,
            }])
            .set_tags(vec!["foo".into()])
            .add_attachment(Attachment {
                content: "aGVsbG8=".into(),
                filename: "hello.txt".into(),
                disposition: Some(Disposition::Attachment),
                id: None,
            })
            .set_send_at(1_700_000_000)
            .set_precedence_bulk(false)
            .add_reference("<ref@domain.com>")
            .set_settings(Settings {
                track_clicks: true,
                ..Default::default()
            });

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["cc"][0], json!({"email": "cc@email.com"}));
        assert_eq!(json["reply_to"]["email"], "reply@domain.com");
        assert_eq!(json["personalization"][0]["data"]["var"], "value");
        assert_eq!(json["attachments"][0]["disposition"], "attachment");
        assert_eq!(json["send_at"], 1_700_000_000);
        assert_eq!(json["precedence_bulk"], false);
        assert_eq!(json["references"], json!(["<ref@domain.com>"]));
        assert_eq!(
            json["settings"],
            json!({"track_clicks": true, "track_opens": false, "track_content": false})
        );
    }

    #[tokio::test]
    async fn send_posts_message_and_returns_message_id() {
        let transport =
            FakeTransport::new(202, "").with_header("x-message-id", "5e42957d51f1d94a1070a733");
        let client = make_client(transport.clone());

        let response = client.email().send(&sample()).await.unwrap();
        assert_eq!(response.status(), 202);
        assert_eq!(response.message_id(), Some("5e42957d51f1d94a1070a733"));

        let request = transport.last_request();
        assert_eq!(request.method, reqwest::Method::POST);
        assert_eq!(request.url.as_str(), "https://api.mailersend.com/v1/email");
        assert_eq!(transport.last_body_json()["subject"], "Subject");
    }

    #[tokio::test]
    async fn send_with_cancelled_token_is_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let client = make_client(FakeTransport::hanging()).with_cancellation(token);

        let err = client.email().send(&sample()).await.unwrap_err();
        assert!(matches!(
            err,
            MailerSendError::Cancelled(CancelReason::Cancelled)
        ));
        assert!(err.response().is_none());
    }

    #[tokio::test]
    async fn send_surfaces_validation_failures() {
        let body = r#"{"message":"The from.email must be verified.","errors":{"from.email":["The from.email must be verified."]}}"#;
        let client = make_client(FakeTransport::new(422, body));

        let err = client.email().send(&sample()).await.unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!(api.status, 422);
        assert_eq!(api.extra["errors"]["from.email"][0], "The from.email must be verified.");
    }
}
