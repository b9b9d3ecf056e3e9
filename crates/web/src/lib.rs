use axum::{Router, middleware::from_fn_with_state};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod state;

use features::{athletes, claims, dashboard, events, ranking, schools, session, users};
use middleware::session::load_session;
pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::assign_ranking,
        athletes::handlers::delete_athlete,
        ranking::handlers::get_ranking,
        ranking::handlers::get_filter_options,
        schools::handlers::list_schools,
        schools::handlers::get_school,
        schools::handlers::create_school,
        schools::handlers::update_school,
        schools::handlers::delete_school,
        schools::handlers::download_report,
        events::handlers::list_events,
        events::handlers::upcoming_events,
        events::handlers::calendar,
        events::handlers::calendar_year,
        events::handlers::get_event,
        events::handlers::create_event,
        events::handlers::update_event,
        events::handlers::delete_event,
        claims::handlers::list_claims,
        claims::handlers::get_claim,
        claims::handlers::create_claim,
        claims::handlers::update_claim,
        claims::handlers::delete_claim,
        users::handlers::list_users,
        users::handlers::get_user,
        users::handlers::create_user,
        users::handlers::update_user,
        users::handlers::delete_user,
        users::handlers::change_password,
        session::handlers::get_session,
        dashboard::handlers::get_summary,
    ),
    components(
        schemas(
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AssignRankingRequest,
            storage::dto::ranking::RankingEntry,
            storage::dto::ranking::RankingFilterOptions,
            storage::dto::school::SchoolResponse,
            storage::dto::school::CreateSchoolRequest,
            storage::dto::school::UpdateSchoolRequest,
            storage::dto::event::CalendarDay,
            storage::dto::event::CalendarMonth,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::claim::CreateClaimRequest,
            storage::dto::claim::UpdateClaimRequest,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::user::ChangePasswordRequest,
            storage::dto::dashboard::DashboardSummary,
            storage::dto::dashboard::BeltCount,
            storage::dto::dashboard::RoleCount,
            storage::dto::dashboard::CategoryCount,
            storage::dto::common::PaginationMeta,
            storage::models::Athlete,
            storage::models::Belt,
            storage::models::Category,
            storage::models::CedulaParts,
            storage::models::DocumentType,
            storage::models::School,
            storage::models::KarateEvent,
            storage::models::EventType,
            storage::models::EventStatus,
            storage::models::Claim,
            storage::models::ClaimStatus,
            storage::models::RepresentedType,
            storage::models::User,
            storage::models::Role,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registry"),
        (name = "rankings", description = "Ranking board"),
        (name = "schools", description = "Schools and their PDF reports"),
        (name = "events", description = "Event calendar"),
        (name = "claims", description = "Claims filed by representatives"),
        (name = "users", description = "User administration"),
        (name = "session", description = "Logged-in user"),
        (name = "dashboard", description = "Landing page summary"),
    )
)]
pub struct ApiDoc;

/// Builds the whole HTTP surface over `state`.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .nest("/athletes", athletes::routes::routes())
        .nest("/rankings", ranking::routes::routes())
        .nest("/schools", schools::routes::routes())
        .nest("/events", events::routes::routes())
        .nest("/claims", claims::routes::routes())
        .nest("/users", users::routes::routes())
        .nest("/session", session::routes::routes())
        .nest("/dashboard", dashboard::routes::routes())
        .route_layer(from_fn_with_state(state.clone(), load_session));

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
