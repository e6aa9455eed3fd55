mod alarm;
mod config;
mod discord_client;
mod error;
mod event;
mod handler;
mod payload;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{error, info};

use crate::config::Config;
use crate::discord_client::{DiscordClient, Notify};
use crate::event::SnsEvent;
use crate::handler::{handle, Delivery};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        // CloudWatch records the ingestion time.
        .without_time()
        .init();

    let config = Config::from_env();
    let client = DiscordClient::new();

    let config_ref = &config;
    let client_ref = &client;
    run(service_fn(move |event: LambdaEvent<SnsEvent>| async move {
        function_handler(config_ref, client_ref, event).await
    }))
    .await
}

/// Boundary between the relay and the Lambda runtime: every outcome ends in
/// a log line and a normal return, so a failed delivery never makes the
/// invocation itself fail.
async fn function_handler<N: Notify>(
    config: &Config,
    client: &N,
    event: LambdaEvent<SnsEvent>,
) -> Result<(), Error> {
    match handle(config, client, &event.payload).await {
        Ok(Delivery::Delivered(status)) => info!(status, "webhook response received"),
        Ok(Delivery::Skipped(reason)) => info!(reason, "delivery skipped"),
        Err(err) => error!("failed to relay notification: {}", err),
    }
    Ok(())
}
