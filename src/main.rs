//! Prayer Times Bot binary - composition root.
//!
//! 1. Load and validate configuration
//! 2. Initialize tracing
//! 3. Wire geocoder, timings provider and session store into the conversation
//! 4. Long-poll Telegram until Ctrl-C

use std::sync::Arc;

use prayer_times_bot::adapters::{
    AladhanClient, InMemorySessionStore, NominatimGeocoder, TelegramClient, TelegramPoller,
    UpdateDispatcher,
};
use prayer_times_bot::application::{ConversationSession, LocationResolver, PrayerTimeClient};
use prayer_times_bot::config::{AppConfig, LogFormat, LoggingConfig};

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is configured from the config being loaded
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    }
    tracing::info!(
        api_url = %config.telegram.api_url,
        geocoder = %config.geocoding.base_url,
        prayer_times = %config.prayer_times.base_url,
        method = config.prayer_times.method,
        "Bot token loaded"
    );

    let resolver = Arc::new(LocationResolver::new(Arc::new(NominatimGeocoder::new(
        &config.geocoding,
    ))));
    let prayer_times = Arc::new(PrayerTimeClient::new(Arc::new(AladhanClient::new(
        &config.prayer_times,
    ))));
    let session = Arc::new(ConversationSession::new(
        resolver,
        prayer_times,
        Arc::new(InMemorySessionStore::new()),
    ));

    let telegram = Arc::new(TelegramClient::new(&config.telegram));
    let dispatcher = UpdateDispatcher::new(
        session,
        telegram.clone(),
        config.telegram.worker_idle(),
    );
    let poller = TelegramPoller::new(telegram, dispatcher, config.telegram.retry_delay());

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received");
    };

    if let Err(e) = poller.run(shutdown).await {
        tracing::error!(error = %e, "Polling stopped");
        std::process::exit(1);
    }
    tracing::info!("Bot stopped");
}
