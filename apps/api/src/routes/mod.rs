pub mod health;
pub mod scoring;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::intake::handlers as intake;
use crate::state::AppState;
use crate::workflow::handlers as candidates;

const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

/// Routes that need no application state: health and the pure scoring core.
pub fn stateless_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/scoring/fitment", post(scoring::handle_fitment))
        .route("/api/v1/scoring/retention", post(scoring::handle_retention))
}

pub fn build_router(state: AppState) -> Router {
    stateless_routes()
        // Intake
        .route(
            "/api/v1/resumes/parse",
            post(intake::handle_parse_resume).layer(DefaultBodyLimit::max(MAX_RESUME_BYTES)),
        )
        // Candidates
        .route(
            "/api/v1/candidates",
            post(candidates::handle_submit_application).get(candidates::handle_list_candidates),
        )
        .route("/api/v1/candidates/:id", get(candidates::handle_get_candidate))
        // Personality assessment
        .route(
            "/api/v1/assessments/:token",
            get(assessment::handle_open_assessment).post(assessment::handle_submit_answers),
        )
        .with_state(state)
}
