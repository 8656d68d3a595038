//! Quote provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait that all providers implement
//! - Request pacing configuration
//! - Concrete provider implementations (EOD Historical Data)
//!
//! Providers receive a ready-made ticker. Deciding which ticker to ask for
//! (exchange-qualified or bare) happens in the caller, not here.

mod capabilities;
mod traits;

pub mod eod;

// Re-exports
pub use capabilities::Pacing;
pub use traits::QuoteProvider;
