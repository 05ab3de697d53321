// File: crates/gymbook_users/src/handlers.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use gymbook_common::{not_found, unavailable, validation_error, GymbookError, Role, User};
use gymbook_config::AppConfig;
use gymbook_store::{new_id, JsonUserRepository, UserPatch, UserRepository};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

// Shared state needed by the user handlers
#[derive(Clone)]
pub struct UsersState {
    pub config: Arc<AppConfig>,
    pub users: JsonUserRepository,
}

/// Registration form. Everything but `name` may be omitted.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
}

/// Profile edit. Absent fields keep their stored value; `role` is not editable.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

fn ensure_enabled(state: &UsersState) -> Result<(), GymbookError> {
    if state.config.use_users {
        Ok(())
    } else {
        Err(unavailable("User service is disabled."))
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Handler to register a user profile.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Name missing or body malformed"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Users"
))]
pub async fn create_user_handler(
    State(state): State<Arc<UsersState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), GymbookError> {
    ensure_enabled(&state)?;
    let Json(request) = payload?;

    let name = trimmed(request.name);
    if name.is_empty() {
        warn!("Rejected registration without a name");
        return Err(validation_error("Name is required"));
    }

    let user = User::new(
        new_id(),
        name,
        trimmed(request.email),
        trimmed(request.phone),
        request.role.unwrap_or_default(),
    );
    let user = state.users.insert(user).await?;
    info!("Created user {} ({:?})", user.id, user.role);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler to fetch one user profile.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "Unknown user")
    ),
    tag = "Users"
))]
pub async fn get_user_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, GymbookError> {
    ensure_enabled(&state)?;

    state
        .users
        .find(&id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found("User not found"))
}

/// Handler to edit name, email or phone of a user profile.
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Empty name or body malformed"),
        (status = 404, description = "Unknown user"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Users"
))]
pub async fn update_user_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, GymbookError> {
    ensure_enabled(&state)?;
    let Json(request) = payload?;

    let name = match request.name {
        Some(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(validation_error("Name cannot be empty"));
            }
            Some(name)
        }
        None => None,
    };
    let patch = UserPatch {
        name,
        email: request.email.map(|v| v.trim().to_string()),
        phone: request.phone.map(|v| v.trim().to_string()),
    };

    let user = state.users.update(&id, patch).await?;
    Ok(Json(user))
}
