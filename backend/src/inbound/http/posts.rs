//! Post API handlers.
//!
//! ```text
//! POST /posts {"user_id":1,"content":"Hello, Kubernetes!"}
//! GET /posts/1
//! ```

use crate::domain::ports::PostPersistenceError;
use crate::domain::{Error, Post, PostContent, PostId, PostValidationError, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

/// Creation request body for `POST /posts`.
///
/// Example JSON:
/// `{"user_id":1,"content":"Hello, Kubernetes!"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreatePostRequest {
    /// Identifier of the authoring user. Must reference an existing user.
    pub user_id: i32,
    /// Post body. Must not be empty.
    pub content: String,
}

/// Create a post authored by an existing user.
///
/// The author reference is checked by the store itself, so a post can never
/// be created against a user deleted mid-request; the violation surfaces as
/// a conflict.
#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Referenced user does not exist", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let CreatePostRequest { user_id, content } = payload.into_inner();
    let content = PostContent::new(content).map_err(map_post_validation_error)?;
    let post = state
        .posts
        .create(UserId::from(user_id), &content)
        .await
        .map_err(map_post_persistence_error)?;
    state.metrics.record_post_created();
    Ok(HttpResponse::Created().json(post))
}

/// Fetch a post by identifier.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = i32, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post found", body = Post),
        (status = 404, description = "No such post", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["posts"],
    operation_id = "getPost"
)]
#[get("/posts/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<Post>> {
    let id = PostId::from(id.into_inner());
    let post = state
        .posts
        .find_by_id(id)
        .await
        .map_err(map_post_persistence_error)?
        .ok_or_else(|| Error::not_found(format!("no post with id {id}")))?;
    Ok(web::Json(post))
}

fn map_post_validation_error(err: PostValidationError) -> Error {
    match err {
        PostValidationError::EmptyContent => Error::invalid_request("content must not be empty")
            .with_details(json!({ "field": "content", "code": "empty_content" })),
    }
}

fn map_post_persistence_error(err: PostPersistenceError) -> Error {
    match err {
        PostPersistenceError::Unavailable { message } => {
            warn!(error = %message, "post store unavailable");
            Error::service_unavailable("database unavailable")
        }
        PostPersistenceError::ForeignKeyViolation { .. } => {
            Error::conflict("referenced user does not exist")
                .with_details(json!({ "field": "user_id" }))
        }
        PostPersistenceError::Query { message } => {
            error!(error = %message, "post store query failed");
            Error::internal(message)
        }
    }
}
