//! Market data models
//!
//! - `quote` - Real-time quote payload (RealtimeQuote)

mod quote;

pub use quote::RealtimeQuote;
