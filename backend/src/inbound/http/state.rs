//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle through `actix_web::web::Data` and see only
//! domain ports, so tests swap in fixtures instead of a live store.

use std::sync::Arc;

use crate::domain::ports::{PostRepository, StoreHealth, UserRepository, WikiMetrics};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use wiki_backend::domain::ports::{
///     FixturePostRepository, FixtureStoreHealth, FixtureUserRepository, NoOpWikiMetrics,
/// };
/// use wiki_backend::inbound::http::state::HttpState;
///
/// let users = Arc::new(FixtureUserRepository::new());
/// let state = HttpState {
///     posts: Arc::new(FixturePostRepository::new(Arc::clone(&users))),
///     users,
///     store_health: Arc::new(FixtureStoreHealth::new()),
///     metrics: Arc::new(NoOpWikiMetrics),
/// };
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Store-backed user persistence.
    pub users: Arc<dyn UserRepository>,
    /// Store-backed post persistence.
    pub posts: Arc<dyn PostRepository>,
    /// Connectivity probe consulted by the readiness endpoint.
    pub store_health: Arc<dyn StoreHealth>,
    /// Creation counters, bumped only after successful persistence.
    pub metrics: Arc<dyn WikiMetrics>,
}
