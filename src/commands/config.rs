//! Service status endpoints

use crate::error::Result;
use crate::pipeline::stage_headings;
use crate::SharedState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProviderStatus {
    pub provider: String,
    pub configured: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub version: String,
    pub generation: ProviderStatus,
    pub search: ProviderStatus,
    pub model: String,
    pub temperature: f32,
    pub max_document_chars: usize,
    pub library_path: String,
    pub library_records: usize,
    /// Brief sections, in generation order
    pub pipeline_stages: Vec<&'static str>,
}

/// Report provider configuration and library state. Never exposes key values.
pub async fn status(State(state): State<SharedState>) -> Result<Json<StatusResponse>> {
    Ok(Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generation: ProviderStatus {
            provider: state.llm.provider_name().to_string(),
            configured: state.llm.is_configured(),
        },
        search: ProviderStatus {
            provider: state.search.provider_name().to_string(),
            configured: state.search.is_configured(),
        },
        model: state.config.model.clone(),
        temperature: state.config.temperature,
        max_document_chars: state.config.max_document_chars,
        library_path: state.config.library_path.display().to_string(),
        library_records: state.library.count().await?,
        pipeline_stages: stage_headings(),
    }))
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::state_with;
    use crate::ports::mocks::ScriptedTextGen;
    use std::sync::Arc;

    #[tokio::test]
    async fn status_reflects_providers_and_library() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(
            Arc::new(ScriptedTextGen::new(Vec::<String>::new())),
            dir.path().join("library.json"),
        );

        let response = status(State(state)).await.unwrap();
        assert!(response.generation.configured);
        assert!(!response.search.configured);
        assert_eq!(response.model, "gpt-4.1-nano");
        assert_eq!(response.library_records, 0);
        assert_eq!(response.pipeline_stages.len(), 6);
        assert!(!response.version.is_empty());
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }
}
