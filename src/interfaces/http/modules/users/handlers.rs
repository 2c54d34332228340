//! User management API handlers
//!
//! CRUD endpoints plus the email / credential checks.
//! Delegates to `UserService` from the application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{UserDto, UserRequest, UserSummaryDto};
use crate::application::identity::UserService;
use crate::domain::UserRepositoryInterface;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse};

/// User handler state. The service sits over whichever repository the
/// server was configured with.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<dyn UserRepositoryInterface>>,
}

#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = "Usuarios",
    responses(
        (status = 200, description = "Every user", body = Vec<UserSummaryDto>)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserSummaryDto>>, ApiError> {
    let users = state.user_service.list_users().await.map_err(domain_error)?;
    Ok(Json(users.into_iter().map(UserSummaryDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserSummaryDto),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<UserSummaryDto>, ApiError> {
    let user = state.user_service.get_user(id).await.map_err(domain_error)?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = "Usuarios",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = UserSummaryDto)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    Json(request): Json<UserRequest>,
) -> Result<Json<UserSummaryDto>, ApiError> {
    let user = state
        .user_service
        .create_user(request.into())
        .await
        .map_err(domain_error)?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated (or unchanged)", body = UserSummaryDto),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
    Json(request): Json<UserRequest>,
) -> Result<Json<UserSummaryDto>, ApiError> {
    let user = state
        .user_service
        .update_user(id, request.into())
        .await
        .map_err(domain_error)?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .user_service
        .delete_user(id)
        .await
        .map_err(domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/usuarios/checkMail/{correo}",
    tag = "Usuarios",
    params(("correo" = String, Path, description = "Email to look up")),
    responses(
        (status = 200, description = "Matching record, credential included", body = UserDto),
        (status = 404, description = "No user with that email", body = ApiResponse<String>)
    )
)]
pub async fn check_mail(
    State(state): State<UserHandlerState>,
    Path(correo): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state
        .user_service
        .check_email(&correo)
        .await
        .map_err(domain_error)?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/api/usuarios/checkPassword/{contrasenia}/{correo}",
    tag = "Usuarios",
    params(
        ("contrasenia" = String, Path, description = "Credential to verify"),
        ("correo" = String, Path, description = "Email of the account")
    ),
    responses(
        (status = 200, description = "Matching record, credential included", body = UserDto),
        (status = 404, description = "Unknown email or wrong credential", body = ApiResponse<String>)
    )
)]
pub async fn check_password(
    State(state): State<UserHandlerState>,
    Path((contrasenia, correo)): Path<(String, String)>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state
        .user_service
        .check_password(&contrasenia, &correo)
        .await
        .map_err(domain_error)?;
    Ok(Json(user.into()))
}
