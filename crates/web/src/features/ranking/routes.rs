use axum::{Router, routing::get};

use super::handlers::{get_filter_options, get_ranking};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_ranking))
        .route("/filters", get(get_filter_options))
}
