//! Domain port surface for recording wiki mutation counters.
//!
//! Handlers count successful mutations through this port without seeing a
//! concrete metrics backend. Implementations may export to Prometheus or
//! simply discard the increments in tests.
//!
//! Recording is synchronous and infallible: counter increments are atomic
//! writes that must never suspend or fail a request that the store already
//! accepted.

/// Metrics recording port for successful wiki mutations.
///
/// Callers must invoke these methods strictly after the persistence layer
/// reports success; a failed create must leave every counter untouched.
pub trait WikiMetrics: Send + Sync {
    /// Record one successfully created user.
    fn record_user_created(&self);

    /// Record one successfully created post.
    fn record_post_created(&self);
}

/// Discarding implementation for tests that do not assert on counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpWikiMetrics;

impl WikiMetrics for NoOpWikiMetrics {
    fn record_user_created(&self) {}

    fn record_post_created(&self) {}
}
