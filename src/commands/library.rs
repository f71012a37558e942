//! Meeting library endpoints

use crate::domain::models::BriefRecord;
use crate::error::{AppError, Result};
use crate::SharedState;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

/// One row in the library listing; the full brief stays behind `get`
#[derive(Debug, Serialize)]
pub struct BriefSummary {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub objective: String,
    pub document_count: usize,
    pub created_at: i64,
}

impl From<&BriefRecord> for BriefSummary {
    fn from(record: &BriefRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            company: record.request.company.clone(),
            objective: record.request.objective.clone(),
            document_count: record.document_names.len(),
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClearLibraryResponse {
    pub cleared: usize,
}

/// List archived briefs, most recent first
pub async fn list_briefs(State(state): State<SharedState>) -> Result<Json<Vec<BriefSummary>>> {
    let records = state.library.list().await?;
    let summaries = records.iter().rev().map(BriefSummary::from).collect();
    Ok(Json(summaries))
}

/// Fetch one archived brief in full
pub async fn get_brief(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<BriefRecord>> {
    match state.library.get(id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::NotFound(format!("brief {id} not found"))),
    }
}

/// Delete every archived brief
pub async fn clear_library(State(state): State<SharedState>) -> Result<Json<ClearLibraryResponse>> {
    let cleared = state.library.count().await?;
    state.library.clear().await?;
    Ok(Json(ClearLibraryResponse { cleared }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{meeting, state_with};
    use crate::ports::mocks::ScriptedTextGen;
    use std::sync::Arc;

    async fn seed(state: &SharedState, company: &str) -> i64 {
        let record = BriefRecord::new(meeting(company, "Q3 renewal"), vec![], "# Brief".to_string());
        state.library.save(&record).await.unwrap()
    }

    #[tokio::test]
    async fn listing_is_most_recent_first() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(
            Arc::new(ScriptedTextGen::new(Vec::<String>::new())),
            dir.path().join("library.json"),
        );

        seed(&state, "Acme").await;
        seed(&state, "Globex").await;

        let summaries = list_briefs(State(state)).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].company, "Globex");
        assert_eq!(summaries[1].company, "Acme");
    }

    #[tokio::test]
    async fn get_returns_full_record_or_404() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(
            Arc::new(ScriptedTextGen::new(Vec::<String>::new())),
            dir.path().join("library.json"),
        );
        let id = seed(&state, "Acme").await;

        let record = get_brief(State(state.clone()), Path(id)).await.unwrap();
        assert_eq!(record.brief_markdown, "# Brief");

        let err = get_brief(State(state), Path(id + 999)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn clear_reports_how_many_went() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(
            Arc::new(ScriptedTextGen::new(Vec::<String>::new())),
            dir.path().join("library.json"),
        );
        seed(&state, "Acme").await;
        seed(&state, "Globex").await;

        let response = clear_library(State(state.clone())).await.unwrap();
        assert_eq!(response.cleared, 2);
        assert_eq!(state.library.count().await.unwrap(), 0);
    }
}
