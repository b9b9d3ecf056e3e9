use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use storage::models::User;

use crate::error::WebError;
use crate::state::AppState;

/// The logged-in user, attached to every request by [`load_session`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub async fn load_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let data = state.db.snapshot().await;
    let user = data
        .users
        .iter()
        .find(|u| u.id == state.session.user_id)
        .cloned();

    match user {
        Some(user) => {
            request.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(request).await)
        }
        None => {
            tracing::warn!("Session user {} does not exist", state.session.user_id);
            Err(WebError::Unauthorized)
        }
    }
}
