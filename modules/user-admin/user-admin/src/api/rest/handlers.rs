//! REST handlers for the user-admin module.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path};

use super::dto::{
    CreateUserRequest, CreateUserResponse, ListUsersResponse, OkResponse, UpdateUserRequest,
    UserDto,
};
use super::error::ApiResult;
use super::extract::Caller;
use crate::domain::service::UserAdminService;

/// POST /api/v1/users
///
/// Create a user: identity record plus profile document.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Missing email or password"),
        (status = 403, description = "Caller may not manage users"),
        (status = 500, description = "A backing store failed"),
    )
)]
pub async fn create_user(
    Caller(ctx): Caller,
    Extension(service): Extension<Arc<UserAdminService>>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<CreateUserResponse>> {
    let created = service.create_user(&ctx, req.into()).await?;
    Ok(Json(CreateUserResponse { id: created.id }))
}

/// PATCH /api/v1/users/{id}
///
/// Update credentials (partially) and merge-write the profile document.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "Identity-provider id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = OkResponse),
        (status = 400, description = "Missing id"),
        (status = 403, description = "Caller may not manage users"),
        (status = 500, description = "A backing store failed"),
    )
)]
pub async fn update_user(
    Caller(ctx): Caller,
    Extension(service): Extension<Arc<UserAdminService>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<OkResponse>> {
    service.update_user(&ctx, &id, req.into()).await?;
    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/v1/users/{id}
///
/// Delete the profile document (best-effort) and the identity record.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "Identity-provider id")),
    responses(
        (status = 200, description = "User deleted", body = OkResponse),
        (status = 400, description = "Missing id"),
        (status = 403, description = "Caller may not manage users"),
        (status = 500, description = "Identity deletion failed"),
    )
)]
pub async fn delete_user(
    Caller(ctx): Caller,
    Extension(service): Extension<Arc<UserAdminService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<OkResponse>> {
    service.delete_user(&ctx, &id).await?;
    Ok(Json(OkResponse::ok()))
}

/// GET /api/v1/users
///
/// List all users, ordered by display name.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "User listing", body = ListUsersResponse),
        (status = 403, description = "Caller may not manage users"),
        (status = 500, description = "The document store failed"),
    )
)]
pub async fn list_users(
    Caller(ctx): Caller,
    Extension(service): Extension<Arc<UserAdminService>>,
) -> ApiResult<Json<ListUsersResponse>> {
    let users = service.list_users(&ctx).await?;
    let users: Vec<UserDto> = users.into_iter().map(Into::into).collect();
    Ok(Json(ListUsersResponse { users }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::{delete, get, patch, post};
    use serde_json::Value;
    use tower::ServiceExt as _;
    use user_admin_sdk::AuthClaims;

    use crate::domain::gate::{AccessGate, AllowedOrigins};
    use crate::infra::{InMemoryIdentityProvider, InMemoryProfileRepository};

    const TRUSTED: &str = "https://ops.crewdesk.io";

    fn create_test_service() -> Arc<UserAdminService> {
        let identity = Arc::new(InMemoryIdentityProvider::new());
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let gate = AccessGate::new(AllowedOrigins::new([TRUSTED]));
        Arc::new(UserAdminService::new(gate, identity, profiles))
    }

    fn admin_claims() -> AuthClaims {
        AuthClaims {
            subject: "root".to_owned(),
            role: Some("admin".to_owned()),
        }
    }

    fn create_test_router(service: Arc<UserAdminService>, claims: Option<AuthClaims>) -> Router {
        let mut router = Router::new()
            .route("/api/v1/users", post(create_user).get(list_users))
            .route(
                "/api/v1/users/{id}",
                patch(update_user).delete(delete_user),
            )
            .layer(Extension(service));
        if let Some(claims) = claims {
            router = router.layer(Extension(claims));
        }
        router
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_user_handler_returns_new_id() {
        let app = create_test_router(create_test_service(), Some(admin_claims()));

        let body = r#"{"email":"a@x.com","password":"secret1","profile":{"displayName":"Ali"}}"#;
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn anonymous_caller_without_trusted_origin_gets_problem() {
        let app = create_test_router(create_test_service(), None);

        let request = Request::builder()
            .method("GET")
            .uri("/api/v1/users")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let json = body_json(response).await;
        assert_eq!(json["code"], "permission-denied");
        assert_eq!(json["detail"], "Admins only");
    }

    #[tokio::test]
    async fn trusted_origin_header_allows_anonymous_caller() {
        let app = create_test_router(create_test_service(), None);

        let request = Request::builder()
            .method("GET")
            .uri("/api/v1/users")
            .header(header::ORIGIN, TRUSTED)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["users"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn update_user_handler_acknowledges() {
        let app = create_test_router(create_test_service(), Some(admin_claims()));

        let body = r#"{"profile":{"phone":"0770"}}"#;
        let request = Request::builder()
            .method("PATCH")
            .uri("/api/v1/users/u1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn delete_missing_user_surfaces_internal_problem() {
        let app = create_test_router(create_test_service(), Some(admin_claims()));

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/v1/users/missing-id")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["code"], "internal");
        assert_eq!(json["detail"], "delete-failed");
    }
}
