//! Cached snapshots written for downstream consumers, and the store they
//! live in.
//!
//! - [`model`] - `PriceCache` and `BenchmarkCache` records
//! - [`store`] - `CacheStore` trait implemented by the storage layer

pub mod model;
pub mod store;

pub use model::{BenchmarkCache, PriceCache};
pub use store::CacheStore;
