use rust_decimal::Decimal;

/// Outcome of resolving one symbol's price.
///
/// Resolution never fails from the caller's point of view; a failed lookup
/// is a value like any other and maps to a zero price.
#[derive(Clone, Debug, PartialEq)]
pub enum PriceResolution {
    /// The exchange-qualified ticker returned a positive price.
    Primary(Decimal),
    /// The bare symbol answered. The price may be zero when the provider had
    /// no close for it.
    Fallback(Decimal),
    /// Neither lookup produced a usable answer.
    Failed {
        /// Ticker of the last attempted lookup
        ticker: String,
        /// Why that lookup failed
        reason: String,
    },
}

impl PriceResolution {
    /// The price to store, with failures mapped to zero.
    pub fn price(&self) -> Decimal {
        match self {
            Self::Primary(price) | Self::Fallback(price) => (*price).max(Decimal::ZERO),
            Self::Failed { .. } => Decimal::ZERO,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_of_each_outcome() {
        assert_eq!(PriceResolution::Primary(dec!(120.5)).price(), dec!(120.5));
        assert_eq!(PriceResolution::Fallback(dec!(45000)).price(), dec!(45000));
        assert_eq!(PriceResolution::Fallback(dec!(-2)).price(), Decimal::ZERO);

        let failed = PriceResolution::Failed {
            ticker: "XYZ".to_string(),
            reason: "HTTP 404 from EOD_HISTORICAL_DATA".to_string(),
        };
        assert!(failed.is_failed());
        assert_eq!(failed.price(), Decimal::ZERO);
    }
}
