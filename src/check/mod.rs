//! Username availability checking module

pub mod checker;
pub mod rules;

// Re-export main functionality
pub use checker::UsernameChecker;
pub use rules::{BodyEqualsRule, StatusCodeRule};

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Response;

/// Predicate deciding whether a username is available on a site, given the
/// HTTP response to that site's probe.
///
/// The rule takes ownership of the response so body-reading rules can drain
/// it; rules that only look at headers simply drop it, which releases the
/// connection either way. Implementations must be safe to share across the
/// dispatcher's concurrent tasks.
#[async_trait]
pub trait AvailabilityRule: Send + Sync + std::fmt::Debug {
    /// Evaluate the response. `Ok(true)` means the username is available.
    async fn evaluate(&self, response: Response) -> Result<bool>;
}
