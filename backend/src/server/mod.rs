//! Wires handlers, shared state, and middleware into the HTTP server.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use actix_web_prom::PrometheusMetricsBuilder;

use wiki_backend::Trace;
#[cfg(debug_assertions)]
use wiki_backend::doc::ApiDoc;
use wiki_backend::inbound::http::health::{HealthState, live, ready};
use wiki_backend::inbound::http::posts::{create_post, get_post};
use wiki_backend::inbound::http::state::HttpState;
use wiki_backend::inbound::http::users::{create_user, get_user};
use wiki_backend::outbound::metrics::PrometheusWikiMetrics;
use wiki_backend::outbound::persistence::{
    DieselPostRepository, DieselStoreHealth, DieselUserRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

/// Assemble the handler dependency bundle from Diesel-backed adapters.
fn build_http_state(
    config: &ServerConfig,
    metrics: Arc<PrometheusWikiMetrics>,
) -> web::Data<HttpState> {
    let pool = config.db_pool.clone();
    let store_health = DieselStoreHealth::new(pool.clone(), Arc::clone(&config.bootstrap));
    web::Data::new(HttpState {
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        posts: Arc::new(DieselPostRepository::new(pool)),
        store_health: Arc::new(store_health),
        metrics,
    })
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(create_user)
        .service(get_user)
        .service(create_post)
        .service(get_post)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Build the Actix HTTP server from the resolved configuration.
///
/// The Prometheus middleware is built once and shared across workers so every
/// worker reports into the same registry, which also backs the domain counters.
/// Readiness is never marked here; the readiness endpoint flips the flag once
/// the store answers its first probe.
///
/// # Returns
/// A [`Server`] future; the caller awaits it to drive the listener.
///
/// # Errors
/// Returns [`std::io::Error`] when metric registration fails or the socket
/// cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let prometheus = PrometheusMetricsBuilder::new("wiki")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("HTTP metrics middleware failed: {e}")))?;
    let wiki_metrics = PrometheusWikiMetrics::new(&prometheus.registry)
        .map_err(|e| std::io::Error::other(format!("counter registration failed: {e}")))?;
    let http_state = build_http_state(&config, Arc::new(wiki_metrics));
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: health_state.clone(),
            http_state: http_state.clone(),
        })
        .wrap(prometheus.clone())
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
