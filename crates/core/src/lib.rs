//! Price Cache Core - Domain records, price resolution and the refresh driver.
//!
//! This crate is storage-agnostic: it defines the [`cache::CacheStore`] trait
//! that the `storage-firebase` crate implements, and talks to quote sources
//! through the market-data crate's `QuoteProvider` trait.

pub mod cache;
pub mod constants;
pub mod errors;
pub mod investments;
pub mod prices;
pub mod refresh;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
