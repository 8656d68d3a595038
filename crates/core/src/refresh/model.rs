use std::fmt;

use crate::prices::PriceResolution;

/// Counters reported at the end of a refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Distinct symbols processed.
    pub symbols: usize,
    /// Symbols priced from the exchange-qualified ticker.
    pub primary: usize,
    /// Symbols priced (non-zero) from the bare symbol.
    pub fallback: usize,
    /// Symbols stored with a zero placeholder.
    pub zero_filled: usize,
}

impl RefreshSummary {
    pub fn record(&mut self, resolution: &PriceResolution) {
        self.symbols += 1;
        if resolution.price().is_zero() {
            self.zero_filled += 1;
            return;
        }
        match resolution {
            PriceResolution::Primary(_) => self.primary += 1,
            PriceResolution::Fallback(_) => self.fallback += 1,
            PriceResolution::Failed { .. } => self.zero_filled += 1,
        }
    }
}

impl fmt::Display for RefreshSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} symbols ({} primary, {} fallback, {} zero-filled)",
            self.symbols, self.primary, self.fallback, self.zero_filled
        )
    }
}

/// How a refresh run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No usable investment records; nothing was fetched or written.
    NoInvestments,
    /// Both caches were rewritten.
    Refreshed(RefreshSummary),
}
