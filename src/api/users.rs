//! User CRUD endpoints

use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path, Query};
use crate::domain::user::{User, UserId};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

pub const DEFAULT_LIMIT: u32 = 50;
pub const DEFAULT_OFFSET: u32 = 0;

/// Body of create and update requests.
///
/// Missing fields deserialize as empty strings and are rejected by validation.
#[derive(Debug, Clone, Deserialize)]
pub struct UserApiRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dob: String,
}

/// Response of create and update, which omits `age`
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryResponse {
    pub id: UserId,
    pub name: String,
    pub dob: String,
}

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            dob: user.date_of_birth.to_string(),
        }
    }
}

/// Query string of `GET /users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListUsersQuery {
    /// Resolve `(limit, offset)`: limit must be a positive and offset a
    /// non-negative 32-bit integer. Absent or empty values take the defaults.
    pub fn pagination(&self) -> Result<(u32, u32), ApiError> {
        let limit = match non_empty(&self.limit) {
            Some(raw) => raw
                .parse::<i32>()
                .ok()
                .filter(|l| *l > 0)
                .ok_or_else(|| ApiError::bad_request("invalid limit").with_param("limit"))?
                as u32,
            None => DEFAULT_LIMIT,
        };

        let offset = match non_empty(&self.offset) {
            Some(raw) => raw
                .parse::<i32>()
                .ok()
                .filter(|o| *o >= 0)
                .ok_or_else(|| ApiError::bad_request("invalid offset").with_param("offset"))?
                as u32,
            None => DEFAULT_OFFSET,
        };

        Ok((limit, offset))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>()
        .map_err(|_| ApiError::bad_request("invalid id").with_param("id"))
}

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserApiRequest>,
) -> Result<(StatusCode, Json<UserSummaryResponse>), ApiError> {
    debug!(name = %request.name, dob = %request.dob, "Creating user");

    let user = state
        .user_service
        .create(CreateUserRequest {
            name: request.name,
            dob: request.dob,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserSummaryResponse::from(&user))))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_user_id(&user_id)?;
    debug!(user_id = %id, "Getting user");

    let user = state.user_service.get(id).await?;

    Ok(Json(user))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UserApiRequest>,
) -> Result<Json<UserSummaryResponse>, ApiError> {
    let id = parse_user_id(&user_id)?;
    debug!(user_id = %id, "Updating user");

    let user = state
        .user_service
        .update(
            id,
            UpdateUserRequest {
                name: request.name,
                dob: request.dob,
            },
        )
        .await?;

    Ok(Json(UserSummaryResponse::from(&user)))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_user_id(&user_id)?;
    debug!(user_id = %id, "Deleting user");

    state.user_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /users?limit=&offset=
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    let (limit, offset) = query.pagination()?;
    debug!(limit, offset, "Listing users");

    let users = state.user_service.list(limit, offset).await?;

    Ok(Json(users))
}
