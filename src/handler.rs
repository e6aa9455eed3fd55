use crate::config::Config;
use crate::discord_client::Notify;
use crate::error::NotifierError;
use crate::event::SnsEvent;
use crate::payload::WebhookPayload;

/// Outcome of one invocation, so callers and tests can branch on what
/// happened instead of scraping log lines.
#[derive(Debug, PartialEq)]
pub enum Delivery {
    Delivered(u16),
    Skipped(&'static str),
}

/// Relays the first record of the event to the webhook. Skips without error
/// when no webhook URL is configured; an event with no records is a failure
/// of this invocation.
pub async fn handle<N: Notify>(
    config: &Config,
    notifier: &N,
    event: &SnsEvent,
) -> Result<Delivery, NotifierError> {
    let url = match config.webhook_url() {
        Some(url) => url,
        None => return Ok(Delivery::Skipped("webhook url is not configured")),
    };

    let record = event.records.first().ok_or(NotifierError::NoRecords)?;
    let payload = WebhookPayload::from_message(&record.sns.message);

    let status = notifier.post_payload(url, &payload).await?;
    Ok(Delivery::Delivered(status))
}
