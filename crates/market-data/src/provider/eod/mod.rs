//! EOD Historical Data provider for real-time quotes.
//!
//! Uses the `/real-time/{ticker}` endpoint, which indexes equities under an
//! exchange-qualified ticker (`OGDC.KSE`) and market indexes under their bare
//! symbol (`KSE100`).
//!
//! API documentation: https://eodhistoricaldata.com/financial-apis/live-realtime-stocks-api

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::RealtimeQuote;
use crate::provider::{Pacing, QuoteProvider};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://eodhistoricaldata.com/api";

const PROVIDER_ID: &str = "EOD_HISTORICAL_DATA";

/// EOD Historical Data real-time quote provider.
///
/// # Example
///
/// ```ignore
/// use pricecache_market_data::EodHistoricalDataProvider;
///
/// let provider = EodHistoricalDataProvider::new("your_api_key".to_string());
/// let quote = provider.get_realtime_quote("OGDC.KSE").await?;
/// ```
pub struct EodHistoricalDataProvider {
    client: Client,
    api_key: String,
    base_url: String,
    pacing: Pacing,
}

impl EodHistoricalDataProvider {
    /// Create a new provider with the given API key.
    ///
    /// The HTTP client keeps reqwest's default timeout behaviour; use
    /// [`with_timeout`](Self::with_timeout) to bound requests.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            pacing: Pacing::default(),
        }
    }

    /// Point the provider at a different API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        self
    }

    /// Override the pacing reported to callers.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Endpoint URL for a ticker, without credentials.
    fn realtime_url(&self, ticker: &str) -> String {
        format!(
            "{}/real-time/{}",
            self.base_url,
            urlencoding::encode(ticker)
        )
    }

    fn map_send_error(error: reqwest::Error) -> MarketDataError {
        if error.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(error)
        }
    }

    fn check_status(status: StatusCode) -> Result<(), MarketDataError> {
        // 402 is what the API returns once the daily request quota is spent
        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::PAYMENT_REQUIRED {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    fn parse_quote(body: &str) -> Result<RealtimeQuote, MarketDataError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse quote response: {}", e),
            })?;

        if !value.is_object() {
            return Err(MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: "expected a JSON object".to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to decode quote: {}", e),
        })
    }
}

#[async_trait]
impl QuoteProvider for EodHistoricalDataProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn pacing(&self) -> Pacing {
        self.pacing
    }

    async fn get_realtime_quote(&self, ticker: &str) -> Result<RealtimeQuote, MarketDataError> {
        let url = self.realtime_url(ticker);
        debug!("EOD request: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("api_token", self.api_key.as_str()), ("fmt", "json")])
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::check_status(response.status())?;

        let body = response.text().await.map_err(Self::map_send_error)?;
        Self::parse_quote(&body)
    }
}
