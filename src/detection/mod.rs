//! Rug pull detection over a mint's trade stream
//!
//! Pure analysis: the detector consumes trades the store already fetched and
//! never touches the network.

pub mod config;
pub mod detector;
pub mod result;

pub use config::DetectionConfig;
pub use detector::RugPullDetector;
pub use result::{Detection, Trigger};
