// File: crates/gymbook_users/src/doc.rs

#![cfg(feature = "openapi")]
use gymbook_common::{Role, User};
use utoipa::OpenApi;

use crate::handlers::{CreateUserRequest, UpdateUserRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::create_user_handler,
        crate::handlers::get_user_handler,
        crate::handlers::update_user_handler
    ),
    components(schemas(User, Role, CreateUserRequest, UpdateUserRequest)),
    tags(
        (name = "Users", description = "User profile API")
    ),
    servers(
        (url = "/api", description = "Gymbook API server")
    )
)]
pub struct UsersApiDoc;
