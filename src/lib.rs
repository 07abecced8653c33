//! rugwatch
//!
//! Rug pull detection for Solana mints. A trade ingestor keeps each mint's
//! recent trades in redis; this crate fetches the stream, scans it for exit
//! signatures, and reports a fixed-shape verdict. The async entry point
//! offloads the blocking check so callers on the runtime never stall.

pub mod checker;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use checker::{check_rug_pull, check_rug_pull_sync, check_rug_pull_sync_with};
pub use config::{AppConfig, RedisConfig};
pub use constants::DEFAULT_REDIS_URL;
pub use detection::{Detection, DetectionConfig, RugPullDetector, Trigger};
pub use error::{AppError, AppResult};
pub use models::{CheckReport, DebugInfo, Trade};
pub use store::RedisTradeStore;
