//! Sequential batch driver for the price cache.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use pricecache_market_data::{Pacing, QuoteProvider};

use super::model::{RefreshOutcome, RefreshSummary};
use crate::cache::{BenchmarkCache, CacheStore, PriceCache};
use crate::errors::Result;
use crate::investments::extract_symbols;
use crate::prices::PriceResolver;

#[async_trait]
pub trait PriceRefreshServiceTrait: Send + Sync {
    /// Runs one full refresh: load symbols, resolve every price, rewrite both
    /// caches.
    ///
    /// Per-symbol quote failures are absorbed as zero prices. Only store
    /// failures are returned as errors.
    async fn refresh(&self) -> Result<RefreshOutcome>;
}

/// Refreshes the price cache one symbol at a time.
///
/// Lookups are strictly sequential and followed by the provider's pacing
/// delay, whatever their outcome, so N symbols always cost N delays.
pub struct PriceRefreshService {
    store: Arc<dyn CacheStore>,
    resolver: PriceResolver,
    pacing: Pacing,
}

impl PriceRefreshService {
    pub fn new(
        store: Arc<dyn CacheStore>,
        provider: Arc<dyn QuoteProvider>,
        exchange: impl Into<String>,
    ) -> Self {
        let pacing = provider.pacing();
        Self {
            store,
            resolver: PriceResolver::new(provider, exchange),
            pacing,
        }
    }

    /// Resolves every symbol in order, pacing after each lookup.
    async fn resolve_prices(&self, symbols: &[String]) -> (PriceCache, RefreshSummary) {
        let mut cache = PriceCache::new();
        let mut summary = RefreshSummary::default();

        for symbol in symbols {
            let resolution = self.resolver.resolve(symbol).await;
            summary.record(&resolution);
            cache.insert(symbol.as_str(), resolution.price());

            tokio::time::sleep(self.pacing.delay).await;
        }

        (cache, summary)
    }
}

#[async_trait]
impl PriceRefreshServiceTrait for PriceRefreshService {
    async fn refresh(&self) -> Result<RefreshOutcome> {
        let snapshot = self.store.load_investments().await?;

        let Some(symbols) = extract_symbols(&snapshot) else {
            info!("No investments found. Exiting cleanly.");
            return Ok(RefreshOutcome::NoInvestments);
        };

        debug!(
            "Refreshing {} symbols from {} investments via {}",
            symbols.len(),
            snapshot.len(),
            self.resolver.provider().id()
        );

        let (cache, summary) = self.resolve_prices(&symbols).await;

        self.store.replace_price_cache(&cache).await?;
        info!("Successfully updated price cache.");

        self.store
            .replace_benchmark_cache(&BenchmarkCache::placeholder())
            .await?;

        Ok(RefreshOutcome::Refreshed(summary))
    }
}
