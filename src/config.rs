//! Application configuration
//!
//! All settings come from the environment (optionally via a local `.env`
//! file loaded in main). API keys for the external services live here too;
//! an empty key simply leaves the corresponding port unconfigured.

use crate::error::{AppError, Result};
use std::path::PathBuf;

const DEFAULT_MODEL: &str = "gpt-4.1-nano";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_MAX_DOCUMENT_CHARS: usize = 6000;
const DEFAULT_LIBRARY_CAPACITY: usize = 20;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8321";

/// Runtime configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenAI API key (empty = text generation unconfigured)
    pub openai_api_key: String,
    /// Override for the OpenAI API base URL (proxies, gateways)
    pub openai_api_base: Option<String>,
    /// Serper API key (empty = web search unconfigured)
    pub serper_api_key: String,
    /// Override for the Serper API base URL
    pub serper_api_base: Option<String>,
    /// Model name passed to the text-generation service
    pub model: String,
    /// Sampling temperature for generation
    pub temperature: f32,
    /// Maximum tokens per generated stage
    pub max_tokens: u32,
    /// Per-document character cap applied by the digester
    pub max_document_chars: usize,
    /// Path of the JSON library file
    pub library_path: PathBuf,
    /// Maximum number of briefs kept in the library (oldest trimmed first)
    pub library_capacity: usize,
    /// Listen address for the HTTP API
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_api_base: None,
            serper_api_key: String::new(),
            serper_api_base: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            max_document_chars: DEFAULT_MAX_DOCUMENT_CHARS,
            library_path: PathBuf::from("data/meeting_library.json"),
            library_capacity: DEFAULT_LIBRARY_CAPACITY,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset. Malformed numeric values are errors
    /// rather than silent defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.openai_api_key = key;
        }
        if let Ok(base) = std::env::var("OPENAI_API_BASE") {
            if !base.trim().is_empty() {
                config.openai_api_base = Some(base);
            }
        }
        if let Ok(key) = std::env::var("SERPER_API_KEY") {
            config.serper_api_key = key;
        }
        if let Ok(base) = std::env::var("SERPER_API_BASE") {
            if !base.trim().is_empty() {
                config.serper_api_base = Some(base);
            }
        }
        if let Ok(model) = std::env::var("MEET_PREP_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(raw) = std::env::var("MEET_PREP_TEMPERATURE") {
            config.temperature = raw
                .parse::<f32>()
                .map_err(|_| AppError::Config(format!("invalid MEET_PREP_TEMPERATURE: {raw}")))?;
            if !(0.0..=2.0).contains(&config.temperature) {
                return Err(AppError::Config(format!(
                    "MEET_PREP_TEMPERATURE out of range: {raw}"
                )));
            }
        }
        if let Ok(raw) = std::env::var("MEET_PREP_MAX_TOKENS") {
            config.max_tokens = raw
                .parse::<u32>()
                .map_err(|_| AppError::Config(format!("invalid MEET_PREP_MAX_TOKENS: {raw}")))?;
        }
        if let Ok(raw) = std::env::var("MEET_PREP_MAX_DOC_CHARS") {
            config.max_document_chars = raw
                .parse::<usize>()
                .map_err(|_| AppError::Config(format!("invalid MEET_PREP_MAX_DOC_CHARS: {raw}")))?;
        }
        if let Ok(path) = std::env::var("MEET_PREP_LIBRARY_PATH") {
            config.library_path = PathBuf::from(path);
        }
        if let Ok(raw) = std::env::var("MEET_PREP_LIBRARY_CAPACITY") {
            config.library_capacity = raw.parse::<usize>().map_err(|_| {
                AppError::Config(format!("invalid MEET_PREP_LIBRARY_CAPACITY: {raw}"))
            })?;
        }
        if let Ok(addr) = std::env::var("MEET_PREP_BIND") {
            config.bind_addr = addr;
        }

        Ok(config)
    }

    /// Generation settings derived from this configuration
    pub fn generation(&self) -> crate::ports::llm::GenerationConfig {
        crate::ports::llm::GenerationConfig {
            model: self.model.clone(),
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        }
    }
}
