/// HTTP API command modules
///
/// Each module holds the request/response types and axum handlers for one
/// area of the API. Routes are assembled here and nested under `/api/v1`
/// by main.
pub mod brief;
pub mod config;
pub mod invite;
pub mod library;
pub mod practice;
pub mod transcript;

use crate::SharedState;
use axum::routing::{get, post};
use axum::Router;

/// Build the v1 API router
pub fn api_router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/briefs",
            post(brief::prepare_brief)
                .get(library::list_briefs)
                .delete(library::clear_library),
        )
        .route("/briefs/{id}", get(library::get_brief))
        .route(
            "/practice",
            get(practice::get_session).delete(practice::clear_session),
        )
        .route("/practice/objections", post(practice::next_objection))
        .route("/practice/score", post(practice::score_response))
        .route("/transcripts/summary", post(transcript::summarize))
        .route("/invites/parse", post(invite::parse))
        .route("/status", get(config::status))
        .route("/health", get(config::health))
        .with_state(state)
}
