//! Ports the adapters implement, with their errors and test fixtures.

mod macros;
pub(crate) use macros::port_error;

mod post_repository;
mod store_health;
mod user_repository;
mod wiki_metrics;

pub use post_repository::{FixturePostRepository, PostPersistenceError, PostRepository};
pub use store_health::{FixtureStoreHealth, StoreHealth, StoreHealthError};
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
pub use wiki_metrics::{NoOpWikiMetrics, WikiMetrics};
