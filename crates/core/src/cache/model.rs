use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Last known price per symbol.
///
/// Every symbol processed in a run has an entry; a failed lookup is stored as
/// `0` rather than omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceCache(BTreeMap<String, Decimal>);

impl PriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `price` under `symbol`. Negative prices are clamped to zero.
    pub fn insert(&mut self, symbol: impl Into<String>, price: Decimal) {
        self.0.insert(symbol.into(), price.max(Decimal::ZERO));
    }

    pub fn get(&self, symbol: &str) -> Option<Decimal> {
        self.0.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Portfolio return versus benchmark return.
///
/// Returns are not computed yet; the record is always written as the
/// [`placeholder`](Self::placeholder) so consumers find a well-formed value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkCache {
    pub our_return: Decimal,
    pub benchmark_return: Decimal,
}

impl BenchmarkCache {
    /// The static `{ourReturn: 0, benchmarkReturn: 0}` record.
    pub fn placeholder() -> Self {
        Self {
            our_return: Decimal::ZERO,
            benchmark_return: Decimal::ZERO,
        }
    }
}
