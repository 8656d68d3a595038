use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use pricecache_core::cache::CacheStore;
use pricecache_core::refresh::{PriceRefreshService, PriceRefreshServiceTrait, RefreshOutcome};
use pricecache_market_data::{EodHistoricalDataProvider, Pacing, QuoteProvider};
use pricecache_storage_firebase::RealtimeDatabase;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub fn init_tracing() {
    let log_format =
        std::env::var("PRICE_REFRESH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_provider(config: &Config) -> Arc<dyn QuoteProvider> {
    let mut provider = EodHistoricalDataProvider::new(config.eod_api_key.clone())
        .with_base_url(config.eod_base_url.clone())
        .with_pacing(Pacing::new(config.pacing_delay));
    if let Some(timeout) = config.http_timeout {
        provider = provider.with_timeout(timeout);
    }
    Arc::new(provider)
}

/// Runs one refresh against the configured database.
pub async fn run(config: &Config) -> anyhow::Result<RefreshOutcome> {
    let store: Arc<dyn CacheStore> = Arc::new(
        RealtimeDatabase::connect(
            config.service_account.clone(),
            &config.database_url,
            config.http_timeout,
        )
        .await
        .context("Failed to open database session")?,
    );

    let service = PriceRefreshService::new(
        store.clone(),
        build_provider(config),
        config.exchange.clone(),
    );

    refresh_and_close(store.as_ref(), &service).await
}

/// Runs `service` once, then closes `store` whether or not the refresh
/// succeeded.
pub async fn refresh_and_close(
    store: &dyn CacheStore,
    service: &dyn PriceRefreshServiceTrait,
) -> anyhow::Result<RefreshOutcome> {
    let result = service.refresh().await;
    store.close().await;
    result.context("Price refresh failed")
}

/// Logs how the run ended and maps it to the process exit code.
pub fn report(result: &anyhow::Result<RefreshOutcome>) -> ExitCode {
    match result {
        Ok(RefreshOutcome::NoInvestments) => {
            tracing::info!("Price refresh finished: no investments to refresh");
            ExitCode::SUCCESS
        }
        Ok(RefreshOutcome::Refreshed(summary)) => {
            tracing::info!("Price refresh finished: {}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("FATAL ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
