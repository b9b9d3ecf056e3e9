use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        event::{
            CalendarDay, CalendarMonth, CalendarQuery, CalendarYearQuery, CreateEventRequest,
            EventFilter, UpcomingQuery, UpdateEventRequest,
        },
    },
    models::KarateEvent,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventFilter),
    responses(
        (status = 200, description = "Events retrieved successfully", body = PaginatedResponse<KarateEvent>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    Query(filter): Query<EventFilter>,
) -> Result<Response, WebError> {
    filter.pagination().validate().map_err(WebError::BadRequest)?;

    let response = services::list_events(&db, &filter).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    params(UpcomingQuery),
    responses(
        (status = 200, description = "Next events, soonest first", body = Vec<KarateEvent>)
    ),
    tag = "events"
)]
pub async fn upcoming_events(
    State(db): State<Database>,
    Query(query): Query<UpcomingQuery>,
) -> Result<Response, WebError> {
    let today = Utc::now().date_naive();
    let events = services::upcoming_events(&db, today, query.limit).await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Days of the month that have events", body = Vec<CalendarDay>),
        (status = 400, description = "Invalid year or month")
    ),
    tag = "events"
)]
pub async fn calendar(
    State(db): State<Database>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let days = services::calendar(&db, query.year, query.month).await?;

    Ok(Json(days).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/calendar/year",
    params(CalendarYearQuery),
    responses(
        (status = 200, description = "The twelve months of the year with their event days", body = Vec<CalendarMonth>),
        (status = 400, description = "Invalid year")
    ),
    tag = "events"
)]
pub async fn calendar_year(
    State(db): State<Database>,
    Query(query): Query<CalendarYearQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let months = services::calendar_year(&db, query.year).await?;

    Ok(Json(months).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = KarateEvent),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let event = services::get_event(&db, &id).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = KarateEvent),
        (status = 400, description = "Validation error")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(&db, &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event id")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = KarateEvent),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::update_event(&db, &id, &req).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event id")
    ),
    responses(
        (status = 204, description = "Event deleted successfully"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_event(&db, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
