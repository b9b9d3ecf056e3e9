use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        claim::{ClaimFilter, CreateClaimRequest, UpdateClaimRequest},
        common::PaginatedResponse,
    },
    models::Claim,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::session::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/claims",
    params(ClaimFilter),
    responses(
        (status = 200, description = "Claims visible to the session user", body = PaginatedResponse<Claim>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "claims"
)]
pub async fn list_claims(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(filter): Query<ClaimFilter>,
) -> Result<Response, WebError> {
    filter.pagination().validate().map_err(WebError::BadRequest)?;

    let response = services::list_claims(&db, &user, &filter).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/claims/{id}",
    params(
        ("id" = String, Path, description = "Claim id")
    ),
    responses(
        (status = 200, description = "Claim found", body = Claim),
        (status = 404, description = "Claim not found or not visible")
    ),
    tag = "claims"
)]
pub async fn get_claim(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let claim = services::get_claim(&db, &user, &id).await?;

    Ok(Json(claim).into_response())
}

#[utoipa::path(
    post,
    path = "/api/claims",
    request_body = CreateClaimRequest,
    responses(
        (status = 201, description = "Claim filed", body = Claim),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Unknown athlete or school")
    ),
    tag = "claims"
)]
pub async fn create_claim(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateClaimRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let claim = services::create_claim(&db, &user, &req).await?;

    Ok((StatusCode::CREATED, Json(claim)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/claims/{id}",
    params(
        ("id" = String, Path, description = "Claim id")
    ),
    request_body = UpdateClaimRequest,
    responses(
        (status = 200, description = "Claim updated", body = Claim),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Claim not found or not visible")
    ),
    tag = "claims"
)]
pub async fn update_claim(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClaimRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let claim = services::update_claim(&db, &user, &id, &req).await?;

    Ok(Json(claim).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/claims/{id}",
    params(
        ("id" = String, Path, description = "Claim id")
    ),
    responses(
        (status = 204, description = "Claim deleted"),
        (status = 404, description = "Claim not found or not visible")
    ),
    tag = "claims"
)]
pub async fn delete_claim(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_claim(&db, &user, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
