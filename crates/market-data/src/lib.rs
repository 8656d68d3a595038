//! Price Cache Market Data Crate
//!
//! Provider-agnostic access to real-time quotes for the price refresher.
//!
//! # Overview
//!
//! - [`QuoteProvider`] - the seam the refresh service calls through
//! - [`EodHistoricalDataProvider`] - EOD Historical Data real-time endpoint
//! - [`RealtimeQuote`] - leniently decoded quote payload
//! - [`qualify_ticker`] - builds the exchange-qualified primary ticker
//! - [`Pacing`] - fixed delay the caller keeps between requests
//!
//! # Flow
//!
//! ```text
//!  symbol ──► qualify_ticker ──► QuoteProvider ──► RealtimeQuote
//!                                     │
//!                                     └─► MarketDataError (never fatal to the run)
//! ```

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::MarketDataError;
pub use models::RealtimeQuote;
pub use provider::eod::EodHistoricalDataProvider;
pub use provider::{Pacing, QuoteProvider};
pub use resolver::{qualify_ticker, DEFAULT_EXCHANGE};
