use axum::extract::FromRef;
use storage::Database;

/// Id of the user every request is served as. There is no login flow.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub session: Session,
}

impl AppState {
    pub fn new(db: Database, session_user_id: impl Into<String>) -> Self {
        Self {
            db,
            session: Session {
                user_id: session_user_id.into(),
            },
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Session {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}
