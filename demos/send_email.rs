use std::io;

use mailersend::api::email::{Message, Recipient};
use mailersend::{ApiKey, MailerSendClient};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api_key = required("MAILERSEND_API_KEY")?;
    let from = required("MAILERSEND_FROM")?;
    let to = required("MAILERSEND_TO")?;

    let client = MailerSendClient::new(ApiKey::new(api_key)?);

    let mut message = Message::new();
    message
        .set_from(Recipient::new(from).with_name("MailerSend demo"))
        .set_recipients(vec![Recipient::new(to)])
        .set_subject("Hello from mailersend-rust")
        .set_text("This message was sent by the send_email demo.")
        .set_html("<p>This message was sent by the <b>send_email</b> demo.</p>")
        .set_tags(vec!["demo".to_owned()]);

    let response = client.email().send(&message).await?;
    println!(
        "status: {}, message id: {:?}",
        response.status(),
        response.message_id()
    );

    Ok(())
}
