//! Serper.dev web search adapter
//!
//! Implements the WebSearchPort over Serper's Google search API.

use crate::error::{AppError, Result};
use crate::ports::search::{SearchResult, WebSearchPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SERPER_API_BASE: &str = "https://google.serper.dev";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Serper service implementation
pub struct SerperService {
    client: Client,
    api_key: String,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: Option<String>,
}

impl SerperService {
    /// Create a new Serper service with the given API key
    pub fn new(api_key: String) -> Self {
        Self::with_api_base(api_key, SERPER_API_BASE.to_string())
    }

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
impl WebSearchPort for SerperService {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        log::info!("Running web search: {}", query);

        let response = self
            .client
            .post(format!("{}/search", self.api_base))
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&SearchRequest { q: query, num: limit })
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Search request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Search(format!("Search failed: {}", error_text)));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("Failed to parse search response: {}", e)))?;

        log::info!("Search returned {} organic results", body.organic.len());

        Ok(body
            .organic
            .into_iter()
            .take(limit)
            .map(|r| SearchResult {
                title: r.title,
                snippet: r.snippet,
                link: r.link,
            })
            .collect())
    }

    fn provider_name(&self) -> &str {
        "serper"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serper_service_creation() {
        let service = SerperService::new("test_api_key".to_string());
        assert_eq!(service.provider_name(), "serper");
        assert!(service.is_configured());
    }

    #[test]
    fn test_serper_service_not_configured() {
        let service = SerperService::new("".to_string());
        assert!(!service.is_configured());
    }

    #[test]
    fn test_response_parsing_tolerates_missing_fields() {
        let json = r#"{"organic":[{"title":"Acme news"},{"snippet":"only snippet"}]}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.organic.len(), 2);
        assert_eq!(parsed.organic[0].title, "Acme news");
        assert_eq!(parsed.organic[1].snippet, "only snippet");
    }
}
