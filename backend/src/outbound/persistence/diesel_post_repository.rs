//! PostgreSQL-backed `PostRepository` implementation using Diesel ORM.
//!
//! Referential integrity is enforced by the store: inserting a post whose
//! author does not exist trips the foreign key constraint on
//! `posts.user_id`, which this adapter surfaces as
//! `PostPersistenceError::ForeignKeyViolation`. There is no pre-flight
//! existence check, so concurrent author deletion cannot race the insert.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PostPersistenceError, PostRepository};
use crate::domain::{Post, PostContent, PostId, UserId};

use super::diesel_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, map_referencing_diesel_error,
};
use super::models::{NewPostRow, PostRow};
use super::pool::{DbPool, PoolError};
use super::schema::posts;

/// Diesel-backed implementation of the `PostRepository` port.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Wrap the shared pool in a post repository.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain post repository errors.
fn map_pool_error(error: PoolError) -> PostPersistenceError {
    map_basic_pool_error(error, PostPersistenceError::unavailable)
}

/// Map Diesel errors raised while inserting a post.
///
/// Inserts reference the `users` table, so foreign key violations are
/// distinguished from other query failures.
fn map_insert_error(error: diesel::result::Error) -> PostPersistenceError {
    map_referencing_diesel_error(
        error,
        PostPersistenceError::query,
        PostPersistenceError::unavailable,
        PostPersistenceError::foreign_key_violation,
    )
}

/// Map Diesel errors raised while reading posts.
fn map_select_error(error: diesel::result::Error) -> PostPersistenceError {
    map_basic_diesel_error(
        error,
        PostPersistenceError::query,
        PostPersistenceError::unavailable,
    )
}

/// Convert a database row to a domain Post.
fn row_to_post(row: PostRow) -> Result<Post, PostPersistenceError> {
    let content = PostContent::new(row.content).map_err(|err| {
        PostPersistenceError::query(format!("corrupted post content in database: {err}"))
    })?;
    Ok(Post::new(
        PostId::from(row.post_id),
        UserId::from(row.user_id),
        content,
        row.created_time,
    ))
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn create(
        &self,
        user_id: UserId,
        content: &PostContent,
    ) -> Result<Post, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: PostRow = diesel::insert_into(posts::table)
            .values(NewPostRow {
                user_id: user_id.as_i32(),
                content: content.as_ref(),
            })
            .returning(PostRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_insert_error)?;

        row_to_post(row)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PostRow> = posts::table
            .find(id.as_i32())
            .select(PostRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_select_error)?;

        row.map(row_to_post).transpose()
    }
}
