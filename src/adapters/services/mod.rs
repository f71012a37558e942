//! External service adapters
//!
//! This module contains adapters for external APIs:
//! - LLM (text generation) services
//! - Web search services

pub mod llm;
pub mod search;
