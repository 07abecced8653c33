/// Redis keys shared with the trade ingestion side
///
/// The ingestor writes each mint's trade stream into a sorted set scored by
/// unix timestamp. When updating these values, ensure they match the
/// corresponding constants in the ingestor codebase.
pub mod keys {
    /// Sorted set holding the recent trades for a mint, one JSON member per trade
    pub const RECENT_TRADES_PREFIX: &str = "recent_trades:";

    /// Build the trade-stream key for a mint
    pub fn recent_trades(mint_address: &str) -> String {
        format!("{}{}", RECENT_TRADES_PREFIX, mint_address)
    }
}

/// Redis instance used when the caller does not supply one
pub const DEFAULT_REDIS_URL: &str = "redis://localhost";
