//! Error types for the market data crate.
//!
//! None of these errors are fatal to a refresh run: the price resolver turns
//! every variant into a zero-filled price. The split between
//! [`is_status_failure`](MarketDataError::is_status_failure) and the rest only
//! drives diagnostics.

use thiserror::Error;

/// Errors that can occur while fetching a quote.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider rate limited the request (HTTP 429, or 402 once the
    /// daily quota is spent).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The provider that answered
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider answered successfully but the body was not a quote.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that answered
        provider: String,
        /// What was wrong with the body
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns `true` when the provider was reached and answered with a
    /// non-success status, as opposed to the request failing outright.
    ///
    /// ```
    /// use pricecache_market_data::MarketDataError;
    ///
    /// let error = MarketDataError::HttpStatus { provider: "EOD".to_string(), status: 404 };
    /// assert!(error.is_status_failure());
    ///
    /// let error = MarketDataError::Timeout { provider: "EOD".to_string() };
    /// assert!(!error.is_status_failure());
    /// ```
    pub fn is_status_failure(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::HttpStatus { .. })
    }
}
