//! User endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Request to create a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    pub name: String,
    pub surname: String,
    pub age: i64,
}

/// Request to update a user. All three fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserApiRequest {
    pub name: String,
    pub surname: String,
    pub age: i64,
}

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub age: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_i64(),
            name: user.name().to_string(),
            surname: user.surname().to_string(),
            age: user.age(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().to_rfc3339(),
            deleted_at: user.deleted_at().map(|t| t.to_rfc3339()),
        }
    }
}

/// Delete confirmation body
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await.map_err(ApiError::from)?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /user/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&user_id)?;

    debug!(user_id = id, "Getting user");

    let user = state
        .user_service
        .get(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", id)))?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(name = %request.name, surname = %request.surname, "Creating user");

    let service_request = CreateUserRequest {
        name: request.name,
        surname: request.surname,
        age: request.age,
    };

    let user = state
        .user_service
        .create(service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&user_id)?;

    debug!(user_id = id, "Updating user");

    let service_request = UpdateUserRequest {
        name: request.name,
        surname: request.surname,
        age: request.age,
    };

    let user = state
        .user_service
        .update(id, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let id = parse_user_id(&user_id)?;

    debug!(user_id = id, "Deleting user");

    let deleted = state
        .user_service
        .delete(id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::not_found(format!("User '{}' not found", id)));
    }

    Ok(Json(DeleteUserResponse {
        message: "User successfully deleted".to_string(),
    }))
}

/// Re-validate the path parameter: it must convert to a positive integer.
fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    let id: i64 = raw.parse().map_err(|_| {
        ApiError::bad_request(format!("User ID '{}' is not a valid integer", raw))
            .with_param("user_id")
    })?;

    if id <= 0 {
        return Err(
            ApiError::bad_request("User ID must be greater than zero").with_param("user_id")
        );
    }

    Ok(id)
}
