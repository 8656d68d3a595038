//! Quote provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::RealtimeQuote;

use super::capabilities::Pacing;

/// Trait for real-time quote providers.
///
/// Implement this trait to add support for a new quote source. Callers are
/// expected to issue one request at a time and wait [`pacing`](Self::pacing)
/// between requests.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "EOD_HISTORICAL_DATA".
    fn id(&self) -> &'static str;

    /// Pacing the caller must keep between requests.
    fn pacing(&self) -> Pacing {
        Pacing::default()
    }

    /// Fetch the latest quote for a provider ticker.
    ///
    /// # Arguments
    ///
    /// * `ticker` - The provider ticker, already qualified if needed (e.g. "OGDC.KSE")
    ///
    /// # Returns
    ///
    /// The decoded quote on a successful response, or a `MarketDataError` when
    /// the request fails, the provider answers with a non-success status, or
    /// the body is not a quote object.
    async fn get_realtime_quote(&self, ticker: &str) -> Result<RealtimeQuote, MarketDataError>;
}
