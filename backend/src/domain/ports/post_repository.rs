//! Port abstraction for post persistence adapters and their errors.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Post, PostContent, PostId, UserId};

use super::port_error;
use super::user_repository::FixtureUserRepository;

port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostPersistenceError {
        /// The store cannot currently be reached: pool exhausted, acquire
        /// timed out, or the connection dropped.
        Unavailable => "post store unavailable: {message}",
        /// The post referenced a user the store does not know.
        ForeignKeyViolation => "post references a missing user: {message}",
        /// Query or mutation failed during execution.
        Query => "post store query failed: {message}",
    }
}

/// Port for post storage and retrieval.
///
/// Referential integrity is the store's responsibility: `create` surfaces a
/// [`PostPersistenceError::ForeignKeyViolation`] when `user_id` does not
/// reference an existing user, rather than pre-checking existence.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post; the store assigns the identifier and creation time.
    async fn create(
        &self,
        user_id: UserId,
        content: &PostContent,
    ) -> Result<Post, PostPersistenceError>;

    /// Fetch a post by identifier.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostPersistenceError>;
}

#[derive(Debug)]
struct FixturePostState {
    posts: Vec<Post>,
    next_id: i32,
    unavailable: bool,
}

impl Default for FixturePostState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
            unavailable: false,
        }
    }
}

/// In-memory repository fixture for tests.
///
/// Enforces the same referential rule as the real store by consulting the
/// shared [`FixtureUserRepository`]: creating a post for an unknown user
/// fails with a foreign key violation and stores nothing.
#[derive(Debug)]
pub struct FixturePostRepository {
    users: Arc<FixtureUserRepository>,
    state: Mutex<FixturePostState>,
}

impl FixturePostRepository {
    /// Build an empty fixture repository validating against `users`.
    #[must_use]
    pub fn new(users: Arc<FixtureUserRepository>) -> Self {
        Self {
            users,
            state: Mutex::new(FixturePostState::default()),
        }
    }

    /// Toggle simulated store unavailability.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock_state().unavailable = unavailable;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, FixturePostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PostRepository for FixturePostRepository {
    async fn create(
        &self,
        user_id: UserId,
        content: &PostContent,
    ) -> Result<Post, PostPersistenceError> {
        let mut state = self.lock_state();
        if state.unavailable {
            return Err(PostPersistenceError::unavailable("fixture store offline"));
        }
        if !self.users.contains(user_id) {
            return Err(PostPersistenceError::foreign_key_violation(format!(
                "no user with id {user_id}"
            )));
        }
        let post = Post::new(
            PostId::from(state.next_id),
            user_id,
            content.clone(),
            Utc::now(),
        );
        state.next_id += 1;
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostPersistenceError> {
        let state = self.lock_state();
        if state.unavailable {
            return Err(PostPersistenceError::unavailable("fixture store offline"));
        }
        Ok(state.posts.iter().find(|post| post.post_id() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use actix_rt::System;
    use rstest::rstest;

    use super::*;
    use crate::domain::{UserName, ports::UserRepository};

    async fn repo_with_alice() -> (Arc<FixtureUserRepository>, FixturePostRepository) {
        let users = Arc::new(FixtureUserRepository::new());
        users
            .create(&UserName::new("Alice").expect("valid name"))
            .await
            .expect("create succeeds");
        let posts = FixturePostRepository::new(Arc::clone(&users));
        (users, posts)
    }

    fn content(raw: &str) -> PostContent {
        PostContent::new(raw).expect("valid content")
    }

    #[rstest]
    fn fixture_creates_posts_for_known_users() {
        System::new().block_on(async move {
            let (_users, posts) = repo_with_alice().await;

            let post = posts
                .create(UserId::from(1), &content("Hello"))
                .await
                .expect("create succeeds");
            assert_eq!(post.post_id(), PostId::from(1));
            assert_eq!(post.user_id(), UserId::from(1));
        });
    }

    #[rstest]
    fn fixture_rejects_unknown_users_and_stores_nothing() {
        System::new().block_on(async move {
            let (_users, posts) = repo_with_alice().await;

            let result = posts.create(UserId::from(999), &content("Hello")).await;
            assert!(matches!(
                result,
                Err(PostPersistenceError::ForeignKeyViolation { .. })
            ));

            let found = posts
                .find_by_id(PostId::from(1))
                .await
                .expect("find succeeds");
            assert!(found.is_none());
        });
    }

    #[rstest]
    fn fixture_simulates_unavailability() {
        System::new().block_on(async move {
            let (_users, posts) = repo_with_alice().await;
            posts.set_unavailable(true);

            let result = posts.create(UserId::from(1), &content("Hello")).await;
            assert!(matches!(
                result,
                Err(PostPersistenceError::Unavailable { .. })
            ));
        });
    }

    #[rstest]
    fn error_messages_name_the_failure() {
        let err = PostPersistenceError::foreign_key_violation("no user with id 999");
        assert_eq!(
            err.to_string(),
            "post references a missing user: no user with id 999"
        );
    }
}
