//! Core types and structures for handle-scout

use crate::check::AvailabilityRule;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One configured external site to probe for username availability.
///
/// Immutable once constructed; cloning is cheap (the rule is shared).
#[derive(Debug, Clone)]
pub struct Site {
    pub name: String,
    pub url_template: String,
    pub rule: Arc<dyn AvailabilityRule>,
}

impl Site {
    /// Create a site from a name, a URL template containing a single
    /// `{username}` placeholder, and its availability rule.
    pub fn new(
        name: impl Into<String>,
        url_template: impl Into<String>,
        rule: impl AvailabilityRule + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            rule: Arc::new(rule),
        }
    }

    /// Build the probe URL for a username.
    ///
    /// The username is substituted verbatim: no percent-encoding is applied,
    /// so URL-special characters pass through untouched. This matches the
    /// probing behavior the built-in sites were calibrated against.
    pub fn url_for(&self, username: &str) -> String {
        self.url_template.replace("{username}", username)
    }
}

/// Classification of one site for one username.
#[derive(Debug, Clone)]
pub struct SiteCheck {
    pub site: Site,
    pub available: bool,
    pub checked_at: DateTime<Utc>,
    pub check_duration: Duration,
}

/// Partitioned result of a full check run: every input site lands in
/// exactly one of the two lists, in input order.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub available: Vec<Site>,
    pub unavailable: Vec<Site>,
}

impl Outcome {
    /// Whether the username is free on every checked site.
    pub fn is_fully_available(&self) -> bool {
        self.unavailable.is_empty()
    }

    /// Serializable name-only view of the partition.
    pub fn summary(&self) -> OutcomeSummary {
        OutcomeSummary {
            available: self.available.iter().map(|s| s.name.clone()).collect(),
            unavailable: self.unavailable.iter().map(|s| s.name.clone()).collect(),
        }
    }
}

/// Name-only view of an [`Outcome`], suitable for machine-readable output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeSummary {
    pub available: Vec<String>,
    pub unavailable: Vec<String>,
}

/// Configuration for username checking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub user_agent: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            user_agent: crate::USER_AGENT.to_string(),
        }
    }
}

/// Process-lifetime counters for the checker, safe for concurrent use.
#[derive(Debug, Default)]
pub struct Metrics {
    sites_checked: AtomicU64,
    errors_encountered: AtomicU64,
    total_check_time_ms: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_sites_checked(&self) {
        self.sites_checked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_errors(&self) {
        self.errors_encountered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_check_time(&self, millis: u64) {
        self.total_check_time_ms.fetch_add(millis, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sites_checked: self.sites_checked.load(Ordering::Relaxed),
            errors_encountered: self.errors_encountered.load(Ordering::Relaxed),
            total_check_time_ms: self.total_check_time_ms.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`Metrics`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub sites_checked: u64,
    pub errors_encountered: u64,
    pub total_check_time_ms: u64,
}

impl MetricsSnapshot {
    pub fn avg_check_time_ms(&self) -> f64 {
        if self.sites_checked == 0 {
            0.0
        } else {
            self.total_check_time_ms as f64 / self.sites_checked as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::rules::StatusCodeRule;

    #[test]
    fn test_url_substitution_is_verbatim() {
        let site = Site::new("A", "https://x.test/u/{username}", StatusCodeRule::new(200));
        assert_eq!(site.url_for("bob"), "https://x.test/u/bob");
    }

    #[test]
    fn test_url_substitution_does_not_percent_encode() {
        // Known limitation: URL-special characters are not escaped.
        let site = Site::new("A", "https://x.test/u/{username}", StatusCodeRule::new(200));
        assert_eq!(site.url_for("a b/c?d"), "https://x.test/u/a b/c?d");
    }

    #[test]
    fn test_outcome_summary_serializes() {
        let a = Site::new("A", "https://a.test/{username}", StatusCodeRule::new(200));
        let b = Site::new("B", "https://b.test/{username}", StatusCodeRule::new(404));
        let outcome = Outcome {
            available: vec![a],
            unavailable: vec![b],
        };
        let json = serde_json::to_string(&outcome.summary()).unwrap();
        assert_eq!(json, r#"{"available":["A"],"unavailable":["B"]}"#);
    }

    #[test]
    fn test_metrics_snapshot_avg() {
        let metrics = Metrics::new();
        assert_eq!(metrics.get_stats().avg_check_time_ms(), 0.0);

        metrics.increment_sites_checked();
        metrics.increment_sites_checked();
        metrics.add_check_time(30);
        metrics.add_check_time(10);

        let snapshot = metrics.get_stats();
        assert_eq!(snapshot.sites_checked, 2);
        assert_eq!(snapshot.avg_check_time_ms(), 20.0);
    }
}
