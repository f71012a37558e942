//! Practice/rehearsal simulator
//!
//! A single-stage variant of the pipeline: one call generates a stakeholder
//! objection, another scores the user's reply. The session log lives in
//! memory only and never reaches the meeting library.

use crate::domain::models::{MeetingRequest, PracticeExchange};
use crate::domain::prompts::PromptTemplates;
use crate::error::Result;
use crate::ports::llm::{GenerationConfig, TextGenerationPort};
use std::sync::Arc;

/// Number of recent turns replayed into practice prompts
const SESSION_LOG_WINDOW: usize = 10;

/// Rehearsal coach over the text-generation port
pub struct PracticeCoach {
    llm: Arc<dyn TextGenerationPort>,
    config: GenerationConfig,
}

impl PracticeCoach {
    pub fn new(llm: Arc<dyn TextGenerationPort>, config: GenerationConfig) -> Self {
        Self { llm, config }
    }

    /// Generate the next persona-driven objection for the session
    pub async fn next_objection(
        &self,
        request: &MeetingRequest,
        log: &[PracticeExchange],
    ) -> Result<String> {
        let prompt = PromptTemplates::practice_objection(request, &render_log(log));
        let objection = self.llm.generate(&prompt, &self.config).await?;
        Ok(objection.trim().to_string())
    }

    /// Score a user reply to the last objection. The returned feedback text
    /// (rubric, score, sample answer) is opaque and passed through as-is.
    pub async fn score_response(
        &self,
        request: &MeetingRequest,
        log: &[PracticeExchange],
        response: &str,
    ) -> Result<String> {
        let prompt = PromptTemplates::practice_score(request, &render_log(log), response);
        let feedback = self.llm.generate(&prompt, &self.config).await?;
        Ok(feedback.trim().to_string())
    }
}

/// Flatten the most recent exchanges into prompt text
fn render_log(log: &[PracticeExchange]) -> String {
    let start = log.len().saturating_sub(SESSION_LOG_WINDOW);
    log[start..]
        .iter()
        .flat_map(|exchange| {
            let mut lines = vec![format!("coach: {}", exchange.objection)];
            if let Some(response) = &exchange.response {
                lines.push(format!("you: {}", response));
            }
            if let Some(feedback) = &exchange.feedback {
                lines.push(format!("coach: {}", feedback));
            }
            lines
        })
        .collect::<Vec<_>>()
        .join("\n")
}
