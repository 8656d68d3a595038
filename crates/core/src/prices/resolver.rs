//! Primary → fallback price lookup.
//!
//! The provider lists equities under `SYMBOL.EXCHANGE` and indexes under the
//! bare `SYMBOL`, so each symbol gets at most two lookups:
//!
//! 1. the exchange-qualified ticker, accepted only with a positive close;
//! 2. the bare symbol, accepted with whatever close it reports.
//!
//! No error leaves this module. Failures become [`PriceResolution::Failed`].

use std::sync::Arc;

use log::{debug, info, warn};
use pricecache_market_data::{qualify_ticker, MarketDataError, QuoteProvider};
use rust_decimal::Decimal;

use super::model::PriceResolution;

/// Resolves a current price for one symbol at a time.
pub struct PriceResolver {
    provider: Arc<dyn QuoteProvider>,
    exchange: String,
}

impl PriceResolver {
    pub fn new(provider: Arc<dyn QuoteProvider>, exchange: impl Into<String>) -> Self {
        Self {
            provider,
            exchange: exchange.into(),
        }
    }

    pub fn provider(&self) -> &Arc<dyn QuoteProvider> {
        &self.provider
    }

    /// Resolves `symbol`, issuing the bare-symbol lookup only when the
    /// qualified one fails or reports no positive close.
    ///
    /// Surrounding whitespace is stripped from the tickers sent to the
    /// provider only.
    pub async fn resolve(&self, symbol: &str) -> PriceResolution {
        let symbol = symbol.trim();
        let ticker = qualify_ticker(symbol, &self.exchange);

        match self.provider.get_realtime_quote(&ticker).await {
            Ok(quote) => match quote.positive_close() {
                Some(close) => {
                    info!("Fetched {}: {}", symbol, close);
                    return PriceResolution::Primary(close);
                }
                None => debug!("{} reported no positive close, trying {}", ticker, symbol),
            },
            Err(e) => debug!("Lookup for {} failed ({}), trying {}", ticker, e, symbol),
        }

        if ticker == symbol {
            // Nothing different left to ask for
            return PriceResolution::Failed {
                ticker,
                reason: "no positive close".to_string(),
            };
        }

        match self.provider.get_realtime_quote(symbol).await {
            Ok(quote) => {
                let close = quote.close.unwrap_or(Decimal::ZERO).max(Decimal::ZERO);
                info!("Fetched {} (bare symbol): {}", symbol, close);
                PriceResolution::Fallback(close)
            }
            Err(e) => {
                Self::log_failure(symbol, &e);
                PriceResolution::Failed {
                    ticker: symbol.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    fn log_failure(symbol: &str, error: &MarketDataError) {
        if error.is_status_failure() {
            warn!("Failed to fetch {}: {}", symbol, error);
        } else {
            warn!("Error fetching {}: {}", symbol, error);
        }
    }
}
