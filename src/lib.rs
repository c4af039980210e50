//! Handle Scout - username availability checking across social sites
//!
//! A simple CLI tool that probes a fixed set of websites concurrently and
//! reports where a username is still free.

pub mod check;
pub mod error;
pub mod sites;
pub mod types;

// Re-export commonly used types
pub use error::{HandleScoutError, Result};
pub use types::{
    CheckConfig, Metrics, MetricsSnapshot, Outcome, OutcomeSummary, Site, SiteCheck,
};

// Re-export main functionality
pub use check::{AvailabilityRule, BodyEqualsRule, StatusCodeRule, UsernameChecker};
pub use sites::builtin_sites;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent header sent with every probe: `<tool>-<version>`.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));
