//! Storage interface for the shared cache database.

use async_trait::async_trait;

use super::model::{BenchmarkCache, PriceCache};
use crate::errors::Result;
use crate::investments::InvestmentsSnapshot;

/// Storage interface the refresh driver reads from and writes to.
///
/// Both writes are wholesale overwrites: whatever was stored before is
/// replaced, never merged. A failed write therefore leaves the previous
/// snapshot in place.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Reads the tracked investments. An absent path yields an empty snapshot.
    async fn load_investments(&self) -> Result<InvestmentsSnapshot>;

    /// Replaces the stored price cache with `cache`.
    async fn replace_price_cache(&self, cache: &PriceCache) -> Result<()>;

    /// Replaces the stored benchmark record with `benchmark`.
    async fn replace_benchmark_cache(&self, benchmark: &BenchmarkCache) -> Result<()>;

    /// Releases the underlying session. Closing twice is a no-op.
    async fn close(&self) {}
}
