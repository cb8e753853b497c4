//! Shared helpers for the embedded-PostgreSQL integration suites.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the store harness lives here once: cluster bootstrap under
//! workspace-backed directories, template-based database provisioning, and
//! the skip policy for environments that cannot start an embedded cluster.

pub mod embedded_postgres;
pub mod pg_embed;

mod cluster_skip;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::provision_template_database;
