//! Route registration for the user-admin REST API.

use std::sync::Arc;

use axum::routing::{get, patch};
use axum::{Extension, Router};
use utoipa::OpenApi;

use super::{dto, handlers};
use crate::domain::service::UserAdminService;

/// OpenAPI document for the user-admin REST API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_user,
        handlers::list_users,
        handlers::update_user,
        handlers::delete_user,
    ),
    components(schemas(
        dto::CreateUserRequest,
        dto::CreateUserResponse,
        dto::UpdateUserRequest,
        dto::OkResponse,
        dto::UserDto,
        dto::ListUsersResponse,
    )),
    tags((name = "users", description = "User administration operations"))
)]
pub struct ApiDoc;

/// Mounts the user-admin routes onto `router`.
pub fn register_routes(router: Router, service: Arc<UserAdminService>) -> Router {
    router
        .route(
            "/api/v1/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/v1/users/{id}",
            patch(handlers::update_user).delete(handlers::delete_user),
        )
        .layer(Extension(service))
}
