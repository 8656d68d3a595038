//! Ticker resolution for quote providers.
//!
//! The quote provider lists equities under an exchange-qualified ticker
//! (`OGDC.KSE`) and market indexes under the bare symbol (`KSE100`). The
//! primary ticker is always the qualified one; the bare symbol is the
//! fallback.
//!
//! ```
//! use pricecache_market_data::resolver::qualify_ticker;
//!
//! assert_eq!(qualify_ticker("OGDC", "KSE"), "OGDC.KSE");
//! assert_eq!(qualify_ticker("OGDC", ""), "OGDC");
//! ```

/// Exchange code appended to symbols for the primary lookup.
pub const DEFAULT_EXCHANGE: &str = "KSE";

/// Builds the exchange-qualified ticker for `symbol`.
///
/// A leading dot on `exchange` is tolerated. An empty exchange leaves the
/// symbol untouched.
pub fn qualify_ticker(symbol: &str, exchange: &str) -> String {
    let exchange = exchange.trim().trim_start_matches('.');
    if exchange.is_empty() {
        return symbol.to_string();
    }
    format!("{}.{}", symbol, exchange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify_with_default_exchange() {
        assert_eq!(qualify_ticker("OGDC", DEFAULT_EXCHANGE), "OGDC.KSE");
        assert_eq!(qualify_ticker("KSE100", DEFAULT_EXCHANGE), "KSE100.KSE");
    }

    #[test]
    fn test_qualify_tolerates_leading_dot() {
        assert_eq!(qualify_ticker("HBL", ".KSE"), "HBL.KSE");
    }

    #[test]
    fn test_qualify_with_blank_exchange() {
        assert_eq!(qualify_ticker("HBL", "  "), "HBL");
    }
}
