/// Text-generation service port trait
///
/// Defines the interface for the external text-generation service the
/// pipeline, practice coach, and transcript summarizer all call.
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for generation requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Model name (e.g., "gpt-4.1-nano")
    pub model: String,

    /// Temperature for generation (0.0 to 2.0)
    pub temperature: Option<f32>,

    /// Maximum tokens in response
    pub max_tokens: Option<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4.1-nano".to_string(),
            temperature: Some(0.7),
            max_tokens: Some(2000),
        }
    }
}

/// Port trait for text-generation services
#[async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// Send one prompt and return the generated text block
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
