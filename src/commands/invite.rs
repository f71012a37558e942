//! Invite parsing endpoint

use crate::domain::invite::{self, InviteFields};
use crate::error::{AppError, Result};
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ParseInviteRequest {
    pub invite_text: String,
}

/// Best-effort extraction of form fields from pasted invite text
pub async fn parse(Json(payload): Json<ParseInviteRequest>) -> Result<Json<InviteFields>> {
    if payload.invite_text.trim().is_empty() {
        return Err(AppError::InvalidInput("invite_text is required".to_string()));
    }
    Ok(Json(invite::parse_invite(&payload.invite_text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parses_subject_and_duration() {
        let fields = parse(Json(ParseInviteRequest {
            invite_text: "Subject: Acme quarterly sync\nDuration: 45 minutes".to_string(),
        }))
        .await
        .unwrap();

        assert_eq!(fields.company.as_deref(), Some("Acme quarterly sync"));
        assert_eq!(fields.duration_minutes, Some(45));
    }

    #[tokio::test]
    async fn empty_invite_is_rejected() {
        let err = parse(Json(ParseInviteRequest {
            invite_text: "  ".to_string(),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
