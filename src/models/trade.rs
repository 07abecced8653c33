//! Trade model - a single observed trade for a mint

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// One trade pulled from a mint's recent-trades stream
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    /// When the trade landed
    pub timestamp: DateTime<Utc>,
    /// Market cap of the mint at trade time, in SOL
    pub market_cap_sol: f64,
    /// Trade size in SOL
    pub sol_amount: f64,
}

/// Wire format of a sorted-set member, as written by the ingestor
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TradePayload {
    market_cap_sol: f64,
    sol_amount: f64,
}

impl Trade {
    /// Decode a sorted-set entry
    ///
    /// The member is a JSON payload; the score is the unix timestamp in
    /// seconds, fractional part truncated.
    pub fn from_redis_entry(member: &str, score: f64) -> AppResult<Self> {
        let payload: TradePayload =
            serde_json::from_str(member).map_err(|e| AppError::InvalidTrade(e.to_string()))?;

        let timestamp = Utc
            .timestamp_opt(score as i64, 0)
            .single()
            .ok_or_else(|| AppError::InvalidTrade(format!("timestamp out of range: {}", score)))?;

        Ok(Self {
            timestamp,
            market_cap_sol: payload.market_cap_sol,
            sol_amount: payload.sol_amount,
        })
    }
}
