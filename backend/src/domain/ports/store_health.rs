//! Port abstraction for store connectivity checks.
//!
//! Readiness probes use this port to answer "can the service currently reach
//! its store" without coupling the probe handler to a particular driver.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::port_error;

port_error! {
    /// Errors raised by store health adapters.
    pub enum StoreHealthError {
        /// The store did not answer the connectivity round trip.
        Unreachable => "store unreachable: {message}",
    }
}

/// Port for probing store connectivity.
///
/// Each call performs one fresh round trip; implementations must not cache a
/// previous answer, so a probe observes the store as it is right now.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Complete one round trip against the store.
    async fn ping(&self) -> Result<(), StoreHealthError>;
}

/// Switchable health fixture for tests.
#[derive(Debug)]
pub struct FixtureStoreHealth {
    healthy: AtomicBool,
}

impl Default for FixtureStoreHealth {
    fn default() -> Self {
        Self {
            healthy: AtomicBool::new(true),
        }
    }
}

impl FixtureStoreHealth {
    /// Build a fixture that reports a healthy store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the simulated store state.
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::Release);
    }
}

#[async_trait]
impl StoreHealth for FixtureStoreHealth {
    async fn ping(&self) -> Result<(), StoreHealthError> {
        if self.healthy.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(StoreHealthError::unreachable("fixture store offline"))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_rt::System;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn fixture_reports_healthy_by_default() {
        let health = FixtureStoreHealth::new();

        System::new().block_on(async move {
            assert!(health.ping().await.is_ok());
        });
    }

    #[rstest]
    fn fixture_reports_unreachable_when_toggled() {
        let health = FixtureStoreHealth::new();
        health.set_healthy(false);

        System::new().block_on(async move {
            let result = health.ping().await;
            assert!(matches!(result, Err(StoreHealthError::Unreachable { .. })));

            health.set_healthy(true);
            assert!(health.ping().await.is_ok());
        });
    }
}
