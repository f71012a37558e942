//! Mock implementations for testing

use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationConfig, TextGenerationPort};
use crate::ports::search::{SearchResult, WebSearchPort};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted text-generation mock: returns queued responses in order and can
/// be told to fail at a given call index.
pub struct ScriptedTextGen {
    inner: Mutex<ScriptedInner>,
}

struct ScriptedInner {
    responses: VecDeque<String>,
    /// 0-based call index that returns an error instead of text
    fail_at: Option<usize>,
    /// Prompts received, in call order
    prompts: Vec<String>,
}

impl ScriptedTextGen {
    pub fn new<S: Into<String>>(responses: Vec<S>) -> Self {
        Self {
            inner: Mutex::new(ScriptedInner {
                responses: responses.into_iter().map(Into::into).collect(),
                fail_at: None,
                prompts: Vec::new(),
            }),
        }
    }

    pub fn failing_at<S: Into<String>>(responses: Vec<S>, fail_at: usize) -> Self {
        let mock = Self::new(responses);
        mock.inner.lock().unwrap().fail_at = Some(fail_at);
        mock
    }

    /// Prompts the mock has seen so far
    pub fn prompts(&self) -> Vec<String> {
        self.inner.lock().unwrap().prompts.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().prompts.len()
    }
}

#[async_trait]
impl TextGenerationPort for ScriptedTextGen {
    async fn generate(&self, prompt: &str, _config: &GenerationConfig) -> Result<String> {
        let mut inner = self.inner.lock().unwrap();
        let index = inner.prompts.len();
        inner.prompts.push(prompt.to_string());

        if inner.fail_at == Some(index) {
            return Err(AppError::Llm("scripted failure".to_string()));
        }
        inner
            .responses
            .pop_front()
            .ok_or_else(|| AppError::Llm("no scripted response left".to_string()))
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Web-search mock with fixed results or a forced failure
pub struct MockSearch {
    results: Vec<SearchResult>,
    fail: bool,
    configured: bool,
    queries: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            fail: false,
            configured: true,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// A search port with no API key configured
    pub fn unconfigured() -> Self {
        Self {
            results: Vec::new(),
            fail: false,
            configured: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            results: Vec::new(),
            fail: true,
            configured: true,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebSearchPort for MockSearch {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(AppError::Search("scripted search failure".to_string()));
        }
        Ok(self.results.iter().take(limit).cloned().collect())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
