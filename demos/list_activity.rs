use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use mailersend::api::activity::ActivityOptions;
use mailersend::MailerSendClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let domain_id = std::env::var("MAILERSEND_DOMAIN_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILERSEND_DOMAIN_ID environment variable is required",
        )
    })?;

    // Reads MAILERSEND_API_KEY and, if set, MAILERSEND_API_BASE.
    let client = MailerSendClient::from_env()?;

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
    let options = ActivityOptions {
        domain_id,
        date_from: now - 7 * 24 * 60 * 60,
        date_to: now,
        limit: 25,
        event: vec!["delivered".to_owned(), "opened".to_owned()],
        ..Default::default()
    };

    let (page, _response) = client.activity().list(&options).await?;
    for activity in &page.data {
        println!(
            "{} {} {}",
            activity.created_at, activity.kind, activity.email.recipient.email
        );
    }
    println!("next page: {:?}", page.links.next);
    Ok(())
}
