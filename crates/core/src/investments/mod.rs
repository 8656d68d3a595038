//! Tracked investments and symbol extraction.

mod model;

pub use model::{extract_symbols, InvestmentRecord, InvestmentsSnapshot};
