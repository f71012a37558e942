//! Transcript summarization endpoint

use crate::domain::models::{BriefRecord, MeetingRequest};
use crate::domain::prompts::PromptTemplates;
use crate::error::{AppError, Result};
use crate::SharedState;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeTranscriptRequest {
    pub meeting: MeetingRequest,
    pub transcript: String,
    /// Archive the summary alongside prepared briefs (off by default)
    #[serde(default)]
    pub save_to_library: bool,
}

#[derive(Debug, Serialize)]
pub struct SummarizeTranscriptResponse {
    pub summary_markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
}

/// Summarize a meeting transcript into decisions, risks, and action items
pub async fn summarize(
    State(state): State<SharedState>,
    Json(payload): Json<SummarizeTranscriptRequest>,
) -> Result<Json<SummarizeTranscriptResponse>> {
    if payload.transcript.trim().is_empty() {
        return Err(AppError::InvalidInput("transcript is required".to_string()));
    }

    let prompt = PromptTemplates::transcript_summary(&payload.meeting, &payload.transcript);
    let summary = state
        .llm
        .generate(&prompt, &state.config.generation())
        .await?;
    let summary_markdown = summary.trim().to_string();

    let mut record_id = None;
    if payload.save_to_library {
        let mut meeting = payload.meeting.clone();
        meeting.objective = format!("{} (Transcript Summary)", meeting.objective);
        let record = BriefRecord::new(meeting, vec![], summary_markdown.clone());
        record_id = Some(state.library.save(&record).await?);
    }

    Ok(Json(SummarizeTranscriptResponse {
        summary_markdown,
        record_id,
    }))
}
