//! Best-effort price resolution for a single symbol.
//!
//! - [`model`] - `PriceResolution` outcome type
//! - [`resolver`] - `PriceResolver`, the primary → bare-symbol fallback lookup

pub mod model;
pub mod resolver;

pub use model::PriceResolution;
pub use resolver::PriceResolver;
