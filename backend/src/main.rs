//! Wiki backend binary: starts the HTTP server against PostgreSQL.

mod server;

use actix_web::web;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use wiki_backend::inbound::http::health::HealthState;
use wiki_backend::outbound::persistence::{DatabaseConfig, DbPool, PoolConfig, SchemaBootstrap};

use std::sync::Arc;

/// Process entry: logging, store wiring, then the listener.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database = DatabaseConfig::from_env();
    let db_pool = DbPool::new(PoolConfig::new(database.connection_url()));
    let bootstrap = Arc::new(SchemaBootstrap::new(database.connection_url()));

    // The store may still be starting; readiness probes retry the bootstrap.
    if let Err(err) = bootstrap.ensure().await {
        warn!(error = %err, "schema bootstrap deferred to readiness probes");
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(db_pool, bootstrap);
    info!(addr = %config.bind_addr(), "starting HTTP server");

    create_server(health_state, config)?.await?;
    Ok(())
}
