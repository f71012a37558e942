//! Brief preparation endpoint

use crate::domain::models::{BriefRecord, MeetingRequest, UploadedDocument};
use crate::error::{AppError, Result};
use crate::pipeline::{digester, BriefPipeline};
use crate::SharedState;
use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// A supporting document, base64-encoded for JSON transport
#[derive(Debug, Deserialize)]
pub struct DocumentUpload {
    pub name: String,
    pub content_base64: String,
}

#[derive(Debug, Deserialize)]
pub struct PrepareBriefRequest {
    pub meeting: MeetingRequest,
    #[serde(default)]
    pub documents: Vec<DocumentUpload>,
    #[serde(default = "default_true")]
    pub save_to_library: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct PrepareBriefResponse {
    pub brief_markdown: String,
    /// Library id when the brief was archived, absent otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    pub documents_ingested: usize,
    pub warnings: Vec<String>,
}

/// Run the full preparation pipeline for one meeting.
///
/// Document problems (bad encoding, unreadable files) downgrade to warnings;
/// a stage failure aborts the whole request and nothing is archived.
pub async fn prepare_brief(
    State(state): State<SharedState>,
    Json(payload): Json<PrepareBriefRequest>,
) -> Result<Json<PrepareBriefResponse>> {
    if payload.meeting.company.trim().is_empty() {
        return Err(AppError::InvalidInput("company is required".to_string()));
    }
    if payload.meeting.objective.trim().is_empty() {
        return Err(AppError::InvalidInput("objective is required".to_string()));
    }

    let mut warnings = Vec::new();
    let mut uploads = Vec::with_capacity(payload.documents.len());
    for document in &payload.documents {
        match BASE64.decode(document.content_base64.as_bytes()) {
            Ok(bytes) => uploads.push(UploadedDocument {
                name: document.name.clone(),
                bytes,
            }),
            Err(e) => {
                log::warn!("Could not decode {}: {}", document.name, e);
                warnings.push(format!("Could not decode {}: {}", document.name, e));
            }
        }
    }

    let extraction = digester::extract_documents(&uploads);
    warnings.extend(extraction.warnings);
    let digest = digester::build_digest(&extraction.documents, state.config.max_document_chars);
    let document_names: Vec<String> = extraction
        .documents
        .iter()
        .map(|doc| doc.name.clone())
        .collect();

    let pipeline = BriefPipeline::new(
        state.llm.clone(),
        state.search.clone(),
        state.config.generation(),
    );
    let brief_markdown = pipeline.run(&payload.meeting, &digest).await?;

    let mut record_id = None;
    if payload.save_to_library {
        let record = BriefRecord::new(
            payload.meeting.clone(),
            document_names,
            brief_markdown.clone(),
        );
        match state.library.save(&record).await {
            Ok(id) => record_id = Some(id),
            Err(e) => {
                log::error!("Brief was not archived: {}", e);
                warnings.push(format!("Brief was not archived: {}", e));
            }
        }
    }

    Ok(Json(PrepareBriefResponse {
        brief_markdown,
        record_id,
        documents_ingested: extraction.documents.len(),
        warnings,
    }))
}
