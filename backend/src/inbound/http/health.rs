//! Liveness and readiness probes.
//!
//! Liveness reports on the process alone and never touches the store, so a
//! database outage cannot trigger restarts. Readiness performs a fresh store
//! ping on every probe; a service that started before its database becomes
//! ready on the next probe after the store comes up, without a restart.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, get, web};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

use crate::inbound::http::state::HttpState;

/// Probe flags shared between the handlers and the shutdown path.
///
/// Readiness tracks the outcome of the most recent store probe; liveness is
/// flipped off before graceful shutdown so orchestrators drain early.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl HealthState {
    /// Fresh state: live, but not ready until the store answers a probe.
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }

    /// Record a successful store probe.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Record a failed store probe.
    pub fn mark_not_ready(&self) {
        self.ready.store(false, Ordering::Release);
    }

    /// Start failing liveness probes; called when shutdown begins.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Outcome of the most recent readiness probe.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether liveness probes should still pass.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let status = if probe_ok {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };

        // Probe results must never be cached by intermediaries.
        HttpResponse::build(status)
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Liveness probe. Passes while the process is marked alive; fails once
/// shutdown has begun. Never consults the store; a database outage must not
/// restart the service.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Server process is alive"),
        (status = 405, description = "Probes accept GET only"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health")]
pub async fn live(health: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(health.is_alive())
}

/// Readiness probe. Pings the store and returns 200 only when it answers.
///
/// Each probe performs a fresh round trip, which also drives pending schema
/// migrations on a database that has just come up.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Store reachable; server can handle traffic"),
        (status = 405, description = "Probes accept GET only"),
        (status = 503, description = "Store unreachable")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HttpState>, health: web::Data<HealthState>) -> HttpResponse {
    match state.store_health.ping().await {
        Ok(()) => {
            health.mark_ready();
            HealthState::probe_response(true)
        }
        Err(err) => {
            warn!(error = %err, "readiness probe failed");
            health.mark_not_ready();
            HealthState::probe_response(false)
        }
    }
}
