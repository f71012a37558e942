//! Practice session endpoints
//!
//! The session log lives in application state, not the library; restarting
//! the server starts a fresh session.

use crate::domain::models::{MeetingRequest, PracticeExchange};
use crate::error::{AppError, Result};
use crate::pipeline::practice::PracticeCoach;
use crate::SharedState;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ObjectionRequest {
    pub meeting: MeetingRequest,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub meeting: MeetingRequest,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub objection: String,
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct ClearSessionResponse {
    pub cleared: usize,
}

/// Generate the next stakeholder objection and add it to the session log
pub async fn next_objection(
    State(state): State<SharedState>,
    Json(payload): Json<ObjectionRequest>,
) -> Result<Json<PracticeExchange>> {
    let coach = PracticeCoach::new(state.llm.clone(), state.config.generation());

    let mut log = state.practice_log.lock().await;
    let objection = coach.next_objection(&payload.meeting, &log).await?;

    let exchange = PracticeExchange::new(objection);
    log.push(exchange.clone());
    Ok(Json(exchange))
}

/// Score the user's reply to the most recent open objection
pub async fn score_response(
    State(state): State<SharedState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>> {
    if payload.response.trim().is_empty() {
        return Err(AppError::InvalidInput("response is required".to_string()));
    }

    let coach = PracticeCoach::new(state.llm.clone(), state.config.generation());

    let mut log = state.practice_log.lock().await;
    let index = log
        .iter()
        .rposition(|exchange| exchange.is_open())
        .ok_or_else(|| AppError::InvalidInput("no open objection to score".to_string()))?;

    log[index].response = Some(payload.response.clone());
    let feedback = coach
        .score_response(&payload.meeting, &log, &payload.response)
        .await?;
    log[index].feedback = Some(feedback.clone());

    Ok(Json(ScoreResponse {
        objection: log[index].objection.clone(),
        feedback,
    }))
}

/// The full session log, oldest first
pub async fn get_session(State(state): State<SharedState>) -> Result<Json<Vec<PracticeExchange>>> {
    Ok(Json(state.practice_log.lock().await.clone()))
}

/// Forget the current session
pub async fn clear_session(State(state): State<SharedState>) -> Result<Json<ClearSessionResponse>> {
    let mut log = state.practice_log.lock().await;
    let cleared = log.len();
    log.clear();
    Ok(Json(ClearSessionResponse { cleared }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{meeting, state_with};
    use crate::ports::mocks::ScriptedTextGen;
    use std::sync::Arc;

    #[tokio::test]
    async fn objection_then_score_completes_the_exchange() {
        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(ScriptedTextGen::new(vec![
            "Why should we renew early?",
            "Score: 8/10. Lead with the discount.",
        ]));
        let state = state_with(llm, dir.path().join("library.json"));

        let exchange = next_objection(
            State(state.clone()),
            Json(ObjectionRequest {
                meeting: meeting("Acme", "Q3 renewal"),
            }),
        )
        .await
        .unwrap();
        assert_eq!(exchange.objection, "Why should we renew early?");
        assert!(exchange.is_open());

        let scored = score_response(
            State(state.clone()),
            Json(ScoreRequest {
                meeting: meeting("Acme", "Q3 renewal"),
                response: "Budget closes this quarter".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(scored.feedback, "Score: 8/10. Lead with the discount.");

        let log = get_session(State(state)).await.unwrap();
        assert_eq!(log.len(), 1);
        assert!(!log[0].is_open());
        assert_eq!(log[0].response.as_deref(), Some("Budget closes this quarter"));
    }

    #[tokio::test]
    async fn scoring_without_an_objection_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(ScriptedTextGen::new(vec!["unused"]));
        let state = state_with(llm.clone(), dir.path().join("library.json"));

        let err = score_response(
            State(state),
            Json(ScoreRequest {
                meeting: meeting("Acme", "Q3 renewal"),
                response: "An answer".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_response_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(ScriptedTextGen::new(vec!["objection"]));
        let state = state_with(llm, dir.path().join("library.json"));

        next_objection(
            State(state.clone()),
            Json(ObjectionRequest {
                meeting: meeting("Acme", "Q3 renewal"),
            }),
        )
        .await
        .unwrap();

        let err = score_response(
            State(state),
            Json(ScoreRequest {
                meeting: meeting("Acme", "Q3 renewal"),
                response: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn clear_wipes_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let llm = Arc::new(ScriptedTextGen::new(vec!["one", "two"]));
        let state = state_with(llm, dir.path().join("library.json"));

        for _ in 0..2 {
            next_objection(
                State(state.clone()),
                Json(ObjectionRequest {
                    meeting: meeting("Acme", "Q3 renewal"),
                }),
            )
            .await
            .unwrap();
        }

        let response = clear_session(State(state.clone())).await.unwrap();
        assert_eq!(response.cleared, 2);
        assert!(get_session(State(state)).await.unwrap().is_empty());
    }
}
