use async_trait::async_trait;
use reqwest::Client;

use crate::error::NotifierError;
use crate::payload::WebhookPayload;

/// Seam in front of the webhook endpoint so the handler can be exercised
/// against mock implementations.
#[async_trait]
pub trait Notify {
    async fn post_payload(&self, url: &str, payload: &WebhookPayload)
        -> Result<u16, NotifierError>;
}

pub struct DiscordClient {
    client: Client,
}

impl DiscordClient {
    pub fn new() -> Self {
        Self::new_with_client(Client::new())
    }

    pub fn new_with_client(client: Client) -> Self {
        DiscordClient { client }
    }
}

#[async_trait]
impl Notify for DiscordClient {
    /// One POST, no retry. Returns the response status code; non-2xx is the
    /// caller's to log, not an error.
    async fn post_payload(
        &self,
        url: &str,
        payload: &WebhookPayload,
    ) -> Result<u16, NotifierError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;
        Ok(response.status().as_u16())
    }
}
