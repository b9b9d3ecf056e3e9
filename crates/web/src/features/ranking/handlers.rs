use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        ranking::{RankingEntry, RankingFilter, RankingFilterOptions},
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rankings",
    params(RankingFilter),
    responses(
        (status = 200, description = "Ranking board retrieved successfully", body = PaginatedResponse<RankingEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "rankings"
)]
pub async fn get_ranking(
    State(db): State<Database>,
    Query(filter): Query<RankingFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let response = services::get_ranking(&db, &filter).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rankings/filters",
    responses(
        (status = 200, description = "Values offered by the ranking filters", body = RankingFilterOptions)
    ),
    tag = "rankings"
)]
pub async fn get_filter_options(State(db): State<Database>) -> Result<Response, WebError> {
    let options = services::get_filter_options(&db, Utc::now().year()).await?;

    Ok(Json(options).into_response())
}
