use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::{AssignRankingRequest, AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    responses(
        (status = 200, description = "List all athletes successfully", body = Vec<AthleteResponse>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(State(db): State<Database>) -> Result<Response, WebError> {
    let athletes = services::list_athletes(&db).await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    params(
        ("id" = u32, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<u32>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(&db, id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Unknown school or duplicate cédula")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(AthleteResponse::from(athlete))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{id}",
    params(
        ("id" = u32, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<u32>,
    Json(update_req): Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_athlete(&db, id, &update_req).await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{id}/ranking",
    params(
        ("id" = u32, Path, description = "Athlete id")
    ),
    request_body = AssignRankingRequest,
    responses(
        (status = 200, description = "Ranking assigned", body = AthleteResponse),
        (status = 400, description = "Negative or missing values"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn assign_ranking(
    State(db): State<Database>,
    Path(id): Path<u32>,
    Json(req): Json<AssignRankingRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::assign_ranking(&db, id, &req).await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{id}",
    params(
        ("id" = u32, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<u32>,
) -> Result<Response, WebError> {
    services::delete_athlete(&db, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
