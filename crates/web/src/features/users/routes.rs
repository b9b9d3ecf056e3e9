use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{
    change_password, create_user, delete_user, get_user, list_users, update_user,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/password", put(change_password))
}
