//! Fixture wiring shared by the handler tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::domain::ports::{
    FixturePostRepository, FixtureStoreHealth, FixtureUserRepository, WikiMetrics,
};
use crate::inbound::http::state::HttpState;

/// Metrics double counting recorded creations.
#[derive(Default)]
pub struct CountingMetrics {
    users: AtomicU32,
    posts: AtomicU32,
}

impl CountingMetrics {
    /// Number of user creations recorded so far.
    pub fn users_created(&self) -> u32 {
        self.users.load(Ordering::Acquire)
    }

    /// Number of post creations recorded so far.
    pub fn posts_created(&self) -> u32 {
        self.posts.load(Ordering::Acquire)
    }
}

impl WikiMetrics for CountingMetrics {
    fn record_user_created(&self) {
        self.users.fetch_add(1, Ordering::AcqRel);
    }

    fn record_post_created(&self) {
        self.posts.fetch_add(1, Ordering::AcqRel);
    }
}

/// Fixture ports bundled with the [`HttpState`] that wraps them.
///
/// Keeps direct handles on the fixtures so tests can flip availability or
/// read counters while handlers only see the port trait objects.
pub struct Harness {
    /// Fixture user store.
    pub users: Arc<FixtureUserRepository>,
    /// Fixture post store, validating authors against `users`.
    pub posts: Arc<FixturePostRepository>,
    /// Fixture connectivity probe.
    pub store_health: Arc<FixtureStoreHealth>,
    /// Counting metrics double.
    pub metrics: Arc<CountingMetrics>,
    /// Handler state wired to the fixtures above.
    pub state: HttpState,
}

/// Build a fixture-backed harness for handler tests.
pub fn harness() -> Harness {
    let users = Arc::new(FixtureUserRepository::new());
    let posts = Arc::new(FixturePostRepository::new(Arc::clone(&users)));
    let store_health = Arc::new(FixtureStoreHealth::new());
    let metrics = Arc::new(CountingMetrics::default());
    // Method-call clones so each concrete `Arc` coerces to the `Arc<dyn _>`
    // the field expects; `Arc::clone(&x)` cannot infer the unsized target.
    let state = HttpState {
        users: users.clone(),
        posts: posts.clone(),
        store_health: store_health.clone(),
        metrics: metrics.clone(),
    };
    Harness {
        users,
        posts,
        store_health,
        metrics,
        state,
    }
}
