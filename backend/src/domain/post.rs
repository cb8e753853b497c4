//! The post model and its validated wrappers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::UserId;

/// Validation errors returned by the post constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    /// The content was empty or whitespace-only.
    EmptyContent,
}

impl fmt::Display for PostValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "content must not be empty"),
        }
    }
}

impl std::error::Error for PostValidationError {}

/// Stable post identifier assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i32);

impl PostId {
    /// Access the underlying integer.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<i32> for PostId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body text of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostContent(String);

impl PostContent {
    /// Validating constructor; rejects blank content.
    pub fn new(content: impl Into<String>) -> Result<Self, PostValidationError> {
        Self::from_owned(content.into())
    }

    fn from_owned(content: String) -> Result<Self, PostValidationError> {
        if content.trim().is_empty() {
            return Err(PostValidationError::EmptyContent);
        }
        Ok(Self(content))
    }
}

impl AsRef<str> for PostContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PostContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PostContent> for String {
    fn from(value: PostContent) -> Self {
        value.0
    }
}

impl TryFrom<String> for PostContent {
    type Error = PostValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A post authored by an existing user.
///
/// ## Invariants
/// - `content` contains at least one non-whitespace character.
/// - `user_id` references a row that existed when the post was inserted;
///   the store's foreign key constraint is the authority.
/// - `post_id` and `created_time` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "PostDto", into = "PostDto")]
pub struct Post {
    #[schema(value_type = i32, example = 1)]
    post_id: PostId,
    #[schema(value_type = String, example = "Hello, Kubernetes!")]
    content: PostContent,
    #[schema(value_type = i32, example = 1)]
    user_id: UserId,
    /// Set once by the store when the row is inserted.
    created_time: DateTime<Utc>,
}

impl Post {
    /// Assemble a [`Post`] from already-validated parts.
    pub fn new(
        post_id: PostId,
        user_id: UserId,
        content: PostContent,
        created_time: DateTime<Utc>,
    ) -> Self {
        Self {
            post_id,
            content,
            user_id,
            created_time,
        }
    }

    /// Identifier assigned by the store.
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Author of the post.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Body text supplied at creation.
    pub fn content(&self) -> &PostContent {
        &self.content
    }

    /// Moment the store recorded the row.
    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
struct PostDto {
    post_id: i32,
    content: String,
    user_id: i32,
    created_time: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(value: Post) -> Self {
        let Post {
            post_id,
            content,
            user_id,
            created_time,
        } = value;
        Self {
            post_id: post_id.as_i32(),
            content: content.into(),
            user_id: user_id.as_i32(),
            created_time,
        }
    }
}

impl TryFrom<PostDto> for Post {
    type Error = PostValidationError;

    fn try_from(value: PostDto) -> Result<Self, Self::Error> {
        let PostDto {
            post_id,
            content,
            user_id,
            created_time,
        } = value;
        Ok(Post::new(
            PostId::from(post_id),
            UserId::from(user_id),
            PostContent::new(content)?,
            created_time,
        ))
    }
}
