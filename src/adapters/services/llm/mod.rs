//! Text-generation service adapters
//!
//! Implementations of the TextGenerationPort trait.

pub mod openai;

pub use openai::OpenAIService;
