/// Error types for meet-prep
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Text generation error: {0}")]
    Llm(String),

    #[error("Web search error: {0}")]
    Search(String),

    #[error("Pipeline stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },

    #[error("Library error: {0}")]
    Library(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Wrap an upstream failure so callers can report which step of the
    /// brief pipeline broke.
    pub fn at_stage(stage: &str, source: AppError) -> Self {
        AppError::Stage {
            stage: stage.to_string(),
            message: source.to_string(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Llm(_) | AppError::Search(_) | AppError::Stage { .. } | AppError::Http(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AppError into a JSON error body for the HTTP API
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_names_stage() {
        let err = AppError::at_stage("industry analysis", AppError::Llm("quota exceeded".into()));
        let message = err.to_string();
        assert!(message.contains("industry analysis"));
        assert!(message.contains("quota exceeded"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Stage {
                stage: "context analysis".into(),
                message: "boom".into()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Library("disk full".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
