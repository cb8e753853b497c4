//! PostgreSQL adapters for the domain's persistence ports.
//!
//! Everything in this tree speaks Diesel (async via `diesel-async` over a
//! `bb8` pool) and nothing outside it does. The adapters stay thin: they
//! translate between row structs and domain types, and map driver failures
//! onto the port error enums. Identity, creation timestamps, and referential
//! integrity are the database's job; adapters read the assigned values back
//! with `RETURNING` instead of computing them.
//!
//! Wiring order at startup: resolve [`DatabaseConfig`] from the environment,
//! build a [`DbPool`] from its URL, then hand pool clones to the repositories
//! and the health adapter.
//!
//! # Example
//!
//! ```ignore
//! use wiki_backend::outbound::persistence::{DatabaseConfig, DbPool, DieselUserRepository, PoolConfig};
//!
//! let database = DatabaseConfig::from_env();
//! let pool = DbPool::new(PoolConfig::new(database.connection_url()));
//! let users = DieselUserRepository::new(pool);
//! ```

mod bootstrap;
mod config;
mod diesel_error_mapping;
mod diesel_post_repository;
mod diesel_store_health;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use bootstrap::{SchemaBootstrap, SchemaBootstrapError};
pub use config::{
    DB_HOST_ENV, DB_NAME_ENV, DB_PASSWORD_ENV, DB_PORT_ENV, DB_USER_ENV, DatabaseConfig,
    DefaultEnv, Env,
};
pub use diesel_post_repository::DieselPostRepository;
pub use diesel_store_health::DieselStoreHealth;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
