use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        school::{CreateSchoolRequest, SchoolFilter, SchoolResponse, UpdateSchoolRequest},
    },
    models::School,
    services::report::report_filename,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/schools",
    params(SchoolFilter),
    responses(
        (status = 200, description = "Schools retrieved successfully", body = PaginatedResponse<SchoolResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "schools"
)]
pub async fn list_schools(
    State(db): State<Database>,
    Query(filter): Query<SchoolFilter>,
) -> Result<Response, WebError> {
    filter.pagination().validate().map_err(WebError::BadRequest)?;

    let response = services::list_schools(&db, &filter).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/schools/{value}",
    params(
        ("value" = String, Path, description = "School slug")
    ),
    responses(
        (status = 200, description = "School found", body = School),
        (status = 404, description = "School not found")
    ),
    tag = "schools"
)]
pub async fn get_school(
    State(db): State<Database>,
    Path(value): Path<String>,
) -> Result<Response, WebError> {
    let school = services::get_school(&db, &value).await?;

    Ok(Json(school).into_response())
}

#[utoipa::path(
    post,
    path = "/api/schools",
    request_body = CreateSchoolRequest,
    responses(
        (status = 201, description = "School created successfully", body = School),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A school with the same name exists")
    ),
    tag = "schools"
)]
pub async fn create_school(
    State(db): State<Database>,
    Json(req): Json<CreateSchoolRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let school = services::create_school(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(school)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/schools/{value}",
    params(
        ("value" = String, Path, description = "School slug")
    ),
    request_body = UpdateSchoolRequest,
    responses(
        (status = 200, description = "School updated successfully", body = School),
        (status = 400, description = "Validation error"),
        (status = 404, description = "School not found"),
        (status = 409, description = "A school with the same name exists")
    ),
    tag = "schools"
)]
pub async fn update_school(
    State(db): State<Database>,
    Path(value): Path<String>,
    Json(req): Json<UpdateSchoolRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let school = services::update_school(&db, &value, &req).await?;

    Ok(Json(school).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/schools/{value}",
    params(
        ("value" = String, Path, description = "School slug")
    ),
    responses(
        (status = 204, description = "School deleted successfully"),
        (status = 404, description = "School not found")
    ),
    tag = "schools"
)]
pub async fn delete_school(
    State(db): State<Database>,
    Path(value): Path<String>,
) -> Result<Response, WebError> {
    services::delete_school(&db, &value).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/schools/{value}/report",
    params(
        ("value" = String, Path, description = "School slug")
    ),
    responses(
        (status = 200, description = "PDF report of the school's athletes", content_type = "application/pdf", body = Vec<u8>),
        (status = 404, description = "School not found"),
        (status = 500, description = "Report generation failed")
    ),
    tag = "schools"
)]
pub async fn download_report(
    State(db): State<Database>,
    Path(value): Path<String>,
) -> Result<Response, WebError> {
    let today = Utc::now().date_naive();
    let bytes = services::generate_report(&db, &value, today).await?;

    let disposition = format!("attachment; filename=\"{}\"", report_filename(&value, today));

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
