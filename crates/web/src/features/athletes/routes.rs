use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{
    assign_ranking, create_athlete, delete_athlete, get_athlete, list_athletes, update_athlete,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route("/:id", get(get_athlete).put(update_athlete).delete(delete_athlete))
        .route("/:id/ranking", put(assign_ranking))
}
