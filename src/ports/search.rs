/// Web-search service port trait
///
/// Used to refresh prompts with live intelligence when the request asks
/// for it. Treated as an opaque capability: a query in, snippets out.
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Port trait for web-search services
#[async_trait]
pub trait WebSearchPort: Send + Sync {
    /// Run a query and return up to `limit` results
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}

/// Render results as a bulleted prompt section
pub fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| format!("- {}: {}", r.title, r.snippet))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_results() {
        let results = vec![
            SearchResult {
                title: "Acme raises prices".to_string(),
                snippet: "10% across all tiers".to_string(),
                link: None,
            },
            SearchResult {
                title: "Acme earnings".to_string(),
                snippet: "beat expectations".to_string(),
                link: Some("https://example.com".to_string()),
            },
        ];
        let text = format_results(&results);
        assert_eq!(
            text,
            "- Acme raises prices: 10% across all tiers\n- Acme earnings: beat expectations"
        );
    }
}
