//! Firebase Realtime Database storage for the price cache.
//!
//! Implements `pricecache_core::cache::CacheStore` over the database's REST
//! API, authenticated with a Google service account:
//!
//! - [`credentials`] - base64 service-account key decoding
//! - [`auth`] - RS256 assertion signing and OAuth2 token exchange
//! - [`database`] - `RealtimeDatabase`, the session the refresher holds
//! - [`errors`] - storage errors and their conversion to core errors

pub mod auth;
pub mod credentials;
pub mod database;
pub mod errors;

pub use credentials::ServiceAccountKey;
pub use database::RealtimeDatabase;
pub use errors::StorageError;
