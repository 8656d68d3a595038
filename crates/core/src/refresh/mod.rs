//! Batch refresh of the shared price cache.
//!
//! - [`model`] - Run outcome and summary counters
//! - [`service`] - `PriceRefreshService`, the sequential batch driver
//!
//! ```text
//! CacheStore::load_investments ─► extract_symbols ─► PriceResolver (per symbol, paced)
//!                                                          │
//!        CacheStore::replace_benchmark_cache ◄─ CacheStore::replace_price_cache
//! ```

pub mod model;
pub mod service;


pub use model::{RefreshOutcome, RefreshSummary};
pub use service::{PriceRefreshService, PriceRefreshServiceTrait};
