//! Port abstraction for user storage adapters and their errors.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{User, UserId, UserName};

use super::port_error;

port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store cannot currently be reached: pool exhausted, acquire
        /// timed out, or the connection dropped.
        Unavailable => "user store unavailable: {message}",
        /// Query or mutation failed during execution.
        Query => "user store query failed: {message}",
    }
}

/// Port for user storage and retrieval.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; the store assigns the identifier and creation time.
    async fn create(&self, name: &UserName) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}

#[derive(Debug)]
struct FixtureUserState {
    users: Vec<User>,
    next_id: i32,
    unavailable: bool,
}

impl Default for FixtureUserState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
            unavailable: false,
        }
    }
}

/// In-memory repository fixture for tests.
///
/// Assigns sequential identifiers starting at 1, mirroring a freshly
/// initialised store. Flip [`FixtureUserRepository::set_unavailable`] to make
/// every operation fail as if the store were unreachable.
#[derive(Debug, Default)]
pub struct FixtureUserRepository {
    state: Mutex<FixtureUserState>,
}

impl FixtureUserRepository {
    /// Build an empty fixture repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated store unavailability.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock_state().unavailable = unavailable;
    }

    /// Whether a user with the given identifier exists.
    #[must_use]
    pub fn contains(&self, id: UserId) -> bool {
        self.lock_state().users.iter().any(|user| user.id() == id)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, FixtureUserState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn create(&self, name: &UserName) -> Result<User, UserPersistenceError> {
        let mut state = self.lock_state();
        if state.unavailable {
            return Err(UserPersistenceError::unavailable("fixture store offline"));
        }
        let user = User::new(UserId::from(state.next_id), name.clone(), Utc::now());
        state.next_id += 1;
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.lock_state();
        if state.unavailable {
            return Err(UserPersistenceError::unavailable("fixture store offline"));
        }
        Ok(state.users.iter().find(|user| user.id() == id).cloned())
    }
}
