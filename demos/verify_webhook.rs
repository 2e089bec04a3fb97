//! Verifies a stored webhook call: `verify_webhook <body-file> <signature>`.

use std::fs::File;
use std::io;

use mailersend::webhook::{WebhookEventData, construct_event_from_reader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let secret = std::env::var("MAILERSEND_WEBHOOK_SECRET").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MAILERSEND_WEBHOOK_SECRET environment variable is required",
        )
    })?;
    let mut args = std::env::args().skip(1);
    let (Some(path), Some(signature)) = (args.next(), args.next()) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: verify_webhook <body-file> <signature>",
        )
        .into());
    };

    let event = construct_event_from_reader(File::open(path)?, Some(&signature), &secret)?;
    println!("verified {} from webhook {}", event.kind, event.webhook_id);

    match event.decode_data()? {
        WebhookEventData::Activity(activity) => println!(
            "{} for {} (subject {:?})",
            activity.kind, activity.email.recipient.email, activity.email.subject
        ),
        other => println!("payload: {other:?}"),
    }

    Ok(())
}
