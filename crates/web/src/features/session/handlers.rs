use axum::{
    Extension, Json,
    response::{IntoResponse, Response},
};
use storage::models::User;

use crate::middleware::session::CurrentUser;

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "The logged-in user", body = User),
        (status = 401, description = "The configured session user does not exist")
    ),
    tag = "session"
)]
pub async fn get_session(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Response {
    Json(user).into_response()
}
