//! User API handlers.
//!
//! ```text
//! POST /users {"name":"Alice"}
//! GET /users/1
//! ```

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, User, UserId, UserName, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

/// Creation request body for `POST /users`.
///
/// Example JSON:
/// `{"name":"Alice"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Display name for the new user. Must not be blank.
    pub name: String,
}

/// Create a user.
///
/// The store assigns the identifier and creation timestamp; the response
/// carries both so clients never need a follow-up read.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use wiki_backend::inbound::http::users::create_user;
///
/// let app = App::new().service(create_user);
/// ```
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let name = UserName::new(payload.into_inner().name).map_err(map_user_validation_error)?;
    let user = state
        .users
        .create(&name)
        .await
        .map_err(map_user_persistence_error)?;
    state.metrics.record_user_created();
    Ok(HttpResponse::Created().json(user))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::from(id.into_inner());
    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(map_user_persistence_error)?
        .ok_or_else(|| Error::not_found(format!("no user with id {id}")))?;
    Ok(web::Json(user))
}

fn map_user_validation_error(err: UserValidationError) -> Error {
    match err {
        UserValidationError::EmptyName => Error::invalid_request("name must not be empty")
            .with_details(json!({ "field": "name", "code": "empty_name" })),
    }
}

pub(super) fn map_user_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Unavailable { message } => {
            warn!(error = %message, "user store unavailable");
            Error::service_unavailable("database unavailable")
        }
        UserPersistenceError::Query { message } => {
            error!(error = %message, "user store query failed");
            Error::internal(message)
        }
    }
}
