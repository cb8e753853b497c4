//! Prometheus-backed implementations of the domain metrics port.
//!
//! Collectors register with the registry owned by the HTTP exposition
//! middleware so every counter shows up on `/metrics`.

mod prometheus_wiki;

pub use prometheus_wiki::PrometheusWikiMetrics;
