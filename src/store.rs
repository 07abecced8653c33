//! Redis-backed trade feed
//!
//! Reads the per-mint trade stream the ingestor maintains: a sorted set keyed
//! `recent_trades:<mint>`, scored by unix timestamp, one JSON member per
//! trade. The client is synchronous; the async adapter offloads whole checks
//! to the blocking thread pool rather than awaiting redis here.

use redis::Client;

use crate::constants::keys;
use crate::error::AppResult;
use crate::models::Trade;

/// Blocking client for the trade stream
pub struct RedisTradeStore {
    client: Client,
}

impl RedisTradeStore {
    /// Open a client for the given URL
    ///
    /// Fails on an unparseable URL; the TCP connection is made lazily per
    /// fetch.
    pub fn connect(url: &str) -> AppResult<Self> {
        let client = Client::open(url)?;
        Ok(Self { client })
    }

    /// Fetch the full trade stream for a mint, sorted by timestamp
    ///
    /// An absent key yields an empty vec. Malformed members are logged and
    /// skipped.
    pub fn fetch_trades(&self, mint_address: &str) -> AppResult<Vec<Trade>> {
        let mut conn = self.client.get_connection()?;
        let key = keys::recent_trades(mint_address);

        let exists: bool = redis::cmd("EXISTS").arg(&key).query(&mut conn)?;
        if !exists {
            tracing::debug!(key = %key, "Trade stream key does not exist");
            return Ok(Vec::new());
        }

        let entries: Vec<(String, f64)> = redis::cmd("ZRANGE")
            .arg(&key)
            .arg(0)
            .arg(-1)
            .arg("WITHSCORES")
            .query(&mut conn)?;

        let mut trades = Vec::with_capacity(entries.len());
        for (member, score) in entries {
            match Trade::from_redis_entry(&member, score) {
                Ok(trade) => trades.push(trade),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Skipping malformed trade entry");
                }
            }
        }

        // Same-score members come back in lexical order; the detector needs
        // strict timestamp order.
        trades.sort_by_key(|t| t.timestamp);

        if let (Some(oldest), Some(latest)) = (trades.first(), trades.last()) {
            tracing::debug!(
                key = %key,
                trades = trades.len(),
                span_secs = (latest.timestamp - oldest.timestamp).num_seconds(),
                initial_mc_sol = oldest.market_cap_sol,
                latest_mc_sol = latest.market_cap_sol,
                "Fetched trade stream"
            );
        }

        Ok(trades)
    }
}
