use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        user::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserFilter},
    },
    models::User,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::session::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users",
    params(UserFilter),
    responses(
        (status = 200, description = "Users retrieved successfully", body = PaginatedResponse<User>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "users"
)]
pub async fn list_users(
    State(db): State<Database>,
    Query(filter): Query<UserFilter>,
) -> Result<Response, WebError> {
    filter.pagination().validate().map_err(WebError::BadRequest)?;

    let response = services::list_users(&db, &filter).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let user = services::get_user(&db, &id).await?;

    Ok(Json(user).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(db): State<Database>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::create_user(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Unknown school or email already registered")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::update_user(&db, &id, &req).await?;

    Ok(Json(user).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 404, description = "User not found"),
        (status = 409, description = "The session user cannot delete itself")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(db): State<Database>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_user(&db, &current, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/password",
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = ChangePasswordRequest,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn change_password(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::change_password(&db, &id, &req).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
