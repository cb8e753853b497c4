//! Outbound adapters: concrete implementations of the domain's ports.
//!
//! Each submodule pairs one infrastructure dependency with the port traits it
//! satisfies:
//!
//! - [`persistence`] backs the repositories and the health probe with
//!   PostgreSQL through Diesel.
//! - [`metrics`] exports the domain counters through Prometheus.
//!
//! Adapters translate between domain values and infrastructure types and
//! carry no business rules of their own.

pub mod metrics;
pub mod persistence;
