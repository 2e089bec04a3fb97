//! Resource services.
//!
//! Each service is a cheap `Copy` handle borrowing the [`MailerSendClient`]; it only knows
//! paths, verbs and payload types. Obtain one through the matching accessor:
//!
//! ```no_run
//! # use mailersend::{MailerSendClient, MailerSendError};
//! # async fn run(client: MailerSendClient) -> Result<(), MailerSendError> {
//! use mailersend::api::domains::ListDomainOptions;
//!
//! let (domains, _response) = client.domains().list(&ListDomainOptions::default()).await?;
//! for domain in domains.data {
//!     println!("{} verified={}", domain.name, domain.is_verified);
//! }
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod analytics;
pub mod api_quota;
pub mod bulk_email;
pub mod domains;
pub mod email;
pub mod email_verification;
pub mod identities;
pub mod inbound;
pub mod messages;
pub mod recipients;
pub mod scheduled_messages;
pub mod sms;
pub mod sms_activity;
pub mod sms_inbound;
pub mod sms_messages;
pub mod sms_numbers;
pub mod sms_recipients;
pub mod sms_webhooks;
pub mod smtp_users;
pub mod suppressions;
pub mod templates;
pub mod tokens;
pub mod users;
pub mod webhooks;

pub use activity::ActivityService;
pub use analytics::AnalyticsService;
pub use api_quota::ApiQuotaService;
pub use bulk_email::BulkEmailService;
pub use domains::DomainsService;
pub use email::EmailService;
pub use email_verification::EmailVerificationService;
pub use identities::IdentitiesService;
pub use inbound::InboundService;
pub use messages::MessagesService;
pub use recipients::RecipientsService;
pub use scheduled_messages::ScheduledMessagesService;
pub use sms::SmsService;
pub use sms_activity::SmsActivityService;
pub use sms_inbound::SmsInboundService;
pub use sms_messages::SmsMessagesService;
pub use sms_numbers::SmsNumbersService;
pub use sms_recipients::SmsRecipientsService;
pub use sms_webhooks::SmsWebhooksService;
pub use smtp_users::SmtpUsersService;
pub use suppressions::SuppressionsService;
pub use templates::TemplatesService;
pub use tokens::TokensService;
pub use users::UsersService;
pub use webhooks::WebhooksService;

use crate::client::MailerSendClient;

impl MailerSendClient {
    pub fn activity(&self) -> ActivityService<'_> {
        ActivityService::new(self)
    }

    pub fn analytics(&self) -> AnalyticsService<'_> {
        AnalyticsService::new(self)
    }

    pub fn api_quota(&self) -> ApiQuotaService<'_> {
        ApiQuotaService::new(self)
    }

    pub fn bulk_email(&self) -> BulkEmailService<'_> {
        BulkEmailService::new(self)
    }

    pub fn domains(&self) -> DomainsService<'_> {
        DomainsService::new(self)
    }

    pub fn email(&self) -> EmailService<'_> {
        EmailService::new(self)
    }

    pub fn email_verification(&self) -> EmailVerificationService<'_> {
        EmailVerificationService::new(self)
    }

    /// Sender identities.
    pub fn identities(&self) -> IdentitiesService<'_> {
        IdentitiesService::new(self)
    }

    /// Inbound routes.
    pub fn inbound(&self) -> InboundService<'_> {
        InboundService::new(self)
    }

    pub fn messages(&self) -> MessagesService<'_> {
        MessagesService::new(self)
    }

    pub fn recipients(&self) -> RecipientsService<'_> {
        RecipientsService::new(self)
    }

    pub fn scheduled_messages(&self) -> ScheduledMessagesService<'_> {
        ScheduledMessagesService::new(self)
    }

    pub fn sms(&self) -> SmsService<'_> {
        SmsService::new(self)
    }

    pub fn sms_activity(&self) -> SmsActivityService<'_> {
        SmsActivityService::new(self)
    }

    pub fn sms_inbound(&self) -> SmsInboundService<'_> {
        SmsInboundService::new(self)
    }

    pub fn sms_messages(&self) -> SmsMessagesService<'_> {
        SmsMessagesService::new(self)
    }

    pub fn sms_numbers(&self) -> SmsNumbersService<'_> {
        SmsNumbersService::new(self)
    }

    pub fn sms_recipients(&self) -> SmsRecipientsService<'_> {
        SmsRecipientsService::new(self)
    }

    pub fn sms_webhooks(&self) -> SmsWebhooksService<'_> {
        SmsWebhooksService::new(self)
    }

    pub fn smtp_users(&self) -> SmtpUsersService<'_> {
        SmtpUsersService::new(self)
    }

    pub fn suppressions(&self) -> SuppressionsService<'_> {
        SuppressionsService::new(self)
    }

    pub fn templates(&self) -> TemplatesService<'_> {
        TemplatesService::new(self)
    }

    /// API tokens.
    pub fn tokens(&self) -> TokensService<'_> {
        TokensService::new(self)
    }

    /// Account users.
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    pub fn webhooks(&self) -> WebhooksService<'_> {
        WebhooksService::new(self)
    }
}
