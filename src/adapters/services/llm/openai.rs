//! OpenAI text-generation adapter
//!
//! Implements the TextGenerationPort over OpenAI's chat completions API.

use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationConfig, TextGenerationPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI service implementation
pub struct OpenAIService {
    client: Client,
    api_key: String,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAIService {
    /// Create a new OpenAI service with the given API key
    pub fn new(api_key: String) -> Self {
        Self::with_api_base(api_key, OPENAI_API_BASE.to_string())
    }

    /// Create a service pointed at a custom API base (proxies, gateways)
    pub fn with_api_base(api_key: String, api_base: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            api_base,
        }
    }
}

#[async_trait]
impl TextGenerationPort for OpenAIService {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        let request_body = ChatCompletionRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        log::info!(
            "Calling OpenAI chat completion with model: {}",
            config.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Chat completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Llm(format!(
                "Chat completion failed: {}",
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse completion response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::Llm("No completion choices returned".to_string()))?;

        log::info!(
            "OpenAI completion successful, generated {} characters",
            content.len()
        );

        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_service_creation() {
        let service = OpenAIService::new("test_api_key".to_string());
        assert_eq!(service.provider_name(), "openai");
        assert!(service.is_configured());
    }

    #[test]
    fn test_openai_service_not_configured() {
        let service = OpenAIService::new("".to_string());
        assert!(!service.is_configured());
    }

    #[test]
    fn test_request_body_skips_unset_options() {
        let body = ChatCompletionRequest {
            model: "gpt-4.1-nano".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            temperature: None,
            max_tokens: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
    }
}
