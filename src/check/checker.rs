//! Concurrent username availability checker

use crate::error::{HandleScoutError, Result};
use crate::types::{CheckConfig, Metrics, Outcome, Site, SiteCheck};
use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use reqwest::header;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;

/// Username availability checker with a shared HTTP client.
///
/// The client is reused by all concurrent probes; `Client` is internally
/// reference-counted and safe for concurrent use, so cloning the checker
/// into spawned tasks is cheap.
#[derive(Debug, Clone)]
pub struct UsernameChecker {
    config: CheckConfig,
    client: Client,
    metrics: Arc<Metrics>,
}

impl UsernameChecker {
    /// Create a new checker with default configuration
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Create a new checker with custom configuration
    pub fn with_config(config: CheckConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Probe a single site and classify the username.
    pub async fn check_site(&self, site: &Site, username: &str) -> Result<SiteCheck> {
        let result = self.probe_site(site, username).await;
        if result.is_err() {
            self.metrics.increment_errors();
        }
        result
    }

    async fn probe_site(&self, site: &Site, username: &str) -> Result<SiteCheck> {
        let url = site.url_for(username);
        let start_time = Instant::now();

        // The User-Agent is set per request rather than on the client, so a
        // malformed configured value surfaces as a probe error instead of
        // silently probing with the default agent.
        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, self.config.user_agent.as_str())
            .send()
            .await
            .map_err(|e| HandleScoutError::request(&site.name, e.to_string()))?;

        // The rule consumes the response; body-reading rules drain it fully.
        let available = site
            .rule
            .evaluate(response)
            .await
            .map_err(|e| HandleScoutError::rule(&site.name, e.to_string()))?;

        let duration = start_time.elapsed();
        self.metrics.increment_sites_checked();
        self.metrics.add_check_time(duration.as_millis() as u64);

        tracing::debug!(
            site = %site.name,
            available = %available,
            duration_ms = %duration.as_millis(),
            "Site check completed"
        );

        Ok(SiteCheck {
            site: site.clone(),
            available,
            checked_at: Utc::now(),
            check_duration: duration,
        })
    }

    /// Check a username against every site concurrently.
    ///
    /// One task is spawned per site, unconditionally. Results are consumed
    /// in completion order; the first failure aborts the run and is returned
    /// as the sole outcome. Tasks still in flight at that point are not
    /// cancelled — they run to completion detached and their results are
    /// discarded. On full success the sites are partitioned into available
    /// and unavailable lists, each in input order.
    pub async fn check_all(&self, username: &str, sites: &[Site]) -> Result<Outcome> {
        let batch_start = Instant::now();

        let mut in_flight = FuturesUnordered::new();
        for (index, site) in sites.iter().enumerate() {
            let checker = self.clone();
            let site = site.clone();
            let username = username.to_string();
            in_flight.push(tokio::spawn(async move {
                (index, checker.check_site(&site, &username).await)
            }));
        }

        let mut checks: Vec<Option<SiteCheck>> = vec![None; sites.len()];
        while let Some(joined) = in_flight.next().await {
            let (index, result) = joined.map_err(|e| {
                HandleScoutError::internal(format!("site check task failed: {e}"))
            })?;
            checks[index] = Some(result?);
        }

        let mut outcome = Outcome::default();
        for check in checks.into_iter().flatten() {
            if check.available {
                outcome.available.push(check.site);
            } else {
                outcome.unavailable.push(check.site);
            }
        }

        let batch_duration = batch_start.elapsed();
        tracing::info!(
            sites_checked = %sites.len(),
            available = %outcome.available.len(),
            unavailable = %outcome.unavailable.len(),
            batch_duration_ms = %batch_duration.as_millis(),
            "Username check completed"
        );

        Ok(outcome)
    }

    /// Get checker configuration
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Get current metrics snapshot
    pub fn get_metrics_snapshot(&self) -> crate::types::MetricsSnapshot {
        self.metrics.get_stats()
    }
}

impl Default for UsernameChecker {
    fn default() -> Self {
        Self::new()
    }
}
