/// Database path holding the tracked investment records.
pub const INVESTMENTS_PATH: &str = "investments";

/// Database path the symbol → price map is written to.
pub const PRICE_CACHE_PATH: &str = "priceCache";

/// Database path the benchmark record is written to.
pub const BENCHMARK_CACHE_PATH: &str = "benchmarkCache";
