use std::io;

use mailersend::api::sms::Sms;
use mailersend::{MailerSendClient, RawPhoneNumber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let from = std::env::var("MAILERSEND_SMS_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILERSEND_SMS_FROM environment variable is required",
        )
    })?;
    let to = std::env::var("MAILERSEND_SMS_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILERSEND_SMS_TO environment variable is required",
        )
    })?;
    let text = std::env::var("MAILERSEND_SMS_TEXT")
        .unwrap_or_else(|_| "Hello from the mailersend send_sms demo.".to_owned());

    let client = MailerSendClient::from_env()?;

    let mut sms = Sms::new();
    sms.set_from(from)
        .add_to(RawPhoneNumber::new(to)?)
        .set_text(text);

    let response = client.sms().send(&sms).await?;
    println!(
        "status: {}, sms message id: {:?}",
        response.status(),
        response.header("x-sms-message-id")
    );

    Ok(())
}
