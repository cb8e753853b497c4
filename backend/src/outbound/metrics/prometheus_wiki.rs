//! Prometheus adapter for wiki content metrics.
//!
//! This adapter exports creation counts to Prometheus via the `prometheus`
//! crate. Metrics are registered with a provided registry and exposed via
//! the `/metrics` endpoint.

use prometheus::{IntCounter, Opts, Registry};

use crate::domain::ports::WikiMetrics;

/// Prometheus-backed wiki metrics recorder.
///
/// # Metric Specification
///
/// - **Name**: `users_created_total`
/// - **Type**: Counter
/// - **Meaning**: users successfully persisted since process start
///
/// - **Name**: `posts_created_total`
/// - **Type**: Counter
/// - **Meaning**: posts successfully persisted since process start
///
/// The names are a published scrape contract, so they carry no namespace
/// prefix and must not be renamed.
#[derive(Debug)]
pub struct PrometheusWikiMetrics {
    users_created: IntCounter,
    posts_created: IntCounter,
}

impl PrometheusWikiMetrics {
    /// Build the counters and register them with `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error when Prometheus rejects metric registration, which
    /// includes a second registration of the same counter names.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let users_created = IntCounter::with_opts(Opts::new(
            "users_created_total",
            "Total users created successfully",
        ))?;
        let posts_created = IntCounter::with_opts(Opts::new(
            "posts_created_total",
            "Total posts created successfully",
        ))?;
        registry.register(Box::new(users_created.clone()))?;
        registry.register(Box::new(posts_created.clone()))?;
        Ok(Self {
            users_created,
            posts_created,
        })
    }
}

impl WikiMetrics for PrometheusWikiMetrics {
    fn record_user_created(&self) {
        self.users_created.inc();
    }

    fn record_post_created(&self) {
        self.posts_created.inc();
    }
}
