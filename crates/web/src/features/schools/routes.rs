use axum::{Router, routing::get};

use super::handlers::{
    create_school, delete_school, download_report, get_school, list_schools, update_school,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schools).post(create_school))
        .route("/:value", get(get_school).put(update_school).delete(delete_school))
        .route("/:value/report", get(download_report))
}
