use axum::{Router, routing::get};

use super::handlers::{
    calendar, calendar_year, create_event, delete_event, get_event, list_events, update_event, upcoming_events,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/upcoming", get(upcoming_events))
        .route("/calendar", get(calendar))
        .route("/calendar/year", get(calendar_year))
        .route("/:id", get(get_event).put(update_event).delete(delete_event))
}
