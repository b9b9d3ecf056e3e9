use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{Database, dto::dashboard::DashboardSummary};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary)
    ),
    tag = "dashboard"
)]
pub async fn get_summary(State(db): State<Database>) -> Result<Response, WebError> {
    let summary = services::get_summary(&db, Utc::now().date_naive()).await?;

    Ok(Json(summary).into_response())
}
