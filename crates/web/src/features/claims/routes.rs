use axum::{Router, routing::get};

use super::handlers::{create_claim, delete_claim, get_claim, list_claims, update_claim};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_claims).post(create_claim))
        .route("/:id", get(get_claim).put(update_claim).delete(delete_claim))
}
