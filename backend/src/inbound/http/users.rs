//! Users API handlers.
//!
//! ```text
//! POST   /users          {"name":"Ada","email":"ada@example.com","age":36}
//! GET    /users
//! GET    /users/{id}
//! PUT    /users/{id}     {"name":"Ada King","email":"ada@example.com"}
//! DELETE /users/{id}
//! PUT    /user/{id}      legacy alias of PUT /users/{id}
//! PATCH  /user/{id}      full replacement, same body as PUT
//! ```

use actix_web::{delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, StoredUser, USER_NOT_FOUND, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::deserialize_age;

/// Confirmation message returned by `DELETE /users/{id}`.
pub const USER_DELETED: &str = "User deleted successfully";

/// Request body for create and replace operations.
///
/// Unknown fields are ignored; `age` may be omitted or `null`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact address; stored as given.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Age in years. Whole floats and integer strings are coerced.
    #[serde(default, deserialize_with = "deserialize_age")]
    #[schema(example = 36)]
    pub age: Option<i64>,
}

impl From<UserRequest> for User {
    fn from(value: UserRequest) -> Self {
        Self::new(value.name, value.email, value.age)
    }
}

/// User representation returned by every read or write endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    /// 24-character hex object id.
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Age in years, `null` when unknown.
    pub age: Option<i64>,
}

impl From<StoredUser> for UserResponse {
    fn from(value: StoredUser) -> Self {
        let StoredUser { id, user } = value;
        Self {
            id: id.to_string(),
            name: user.name,
            email: user.email,
            age: user.age,
        }
    }
}

/// Body of a successful delete.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct DeletedResponse {
    /// Always [`USER_DELETED`].
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

/// Parse a path identifier.
///
/// A malformed identifier cannot name a stored user, so it is reported the
/// same way as an unknown one.
fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse().map_err(|_| Error::not_found(USER_NOT_FOUND))
}

/// Register every users route on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users;
///
/// let _app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user)
        .service(list_users)
        .service(get_user)
        .service(replace_user)
        .service(delete_user)
        .service(replace_user_legacy)
        .service(patch_user);
}

/// Create a user and return it with its assigned id.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 503, description = "User store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let created = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(web::Json(created.into()))
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 503, description = "User store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User object id")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 503, description = "User store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(&path)?;
    let user = state.users_query.get_user(&id).await?;
    Ok(web::Json(user.into()))
}

async fn replace(
    state: &HttpState,
    raw_id: &str,
    payload: UserRequest,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(raw_id)?;
    let updated = state.users_command.replace_user(&id, payload.into()).await?;
    Ok(web::Json(updated.into()))
}

/// Replace every field of a user.
///
/// Writing values identical to the stored ones modifies nothing and is
/// reported as 404.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User object id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 404, description = "User not found or unchanged", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 503, description = "User store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "replaceUser"
)]
#[put("/users/{id}")]
pub async fn replace_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    replace(&state, &path, payload.into_inner()).await
}

/// Legacy singular path for [`replace_user`].
#[utoipa::path(
    put,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User object id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 404, description = "User not found or unchanged", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 503, description = "User store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "replaceUserLegacy"
)]
#[put("/user/{id}")]
pub async fn replace_user_legacy(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    replace(&state, &path, payload.into_inner()).await
}

/// Replace a user via PATCH.
///
/// Takes the full body and overwrites every field; there is no partial
/// merge.
#[utoipa::path(
    patch,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User object id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 404, description = "User not found or unchanged", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 503, description = "User store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "patchUser"
)]
#[patch("/user/{id}")]
pub async fn patch_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    replace(&state, &path, payload.into_inner()).await
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User object id")),
    responses(
        (status = 200, description = "User deleted", body = DeletedResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 503, description = "User store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id = parse_user_id(&path)?;
    state.users_command.delete_user(&id).await?;
    Ok(web::Json(DeletedResponse {
        message: USER_DELETED.to_owned(),
    }))
}
