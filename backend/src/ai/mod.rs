//! AI Module for title suggestions
//!
//! Uses the Anthropic Messages API to propose titles for free-text content.
//! Callers that must never fail use [`suggest_titles_or_empty`], which
//! degrades any error to an empty list.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ideation::ai::AiClient;
//!
//! let client = AiClient::from_env()?;
//! let titles = client.suggest_titles("Shared e-bikes docked at every dorm...").await?;
//! ```

pub mod prompt;

use serde::Deserialize;
use std::env;

use crate::error::{AiError, AiResult};

/// Default model
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Number of titles requested from the model
pub const SUGGESTION_COUNT: usize = 4;

/// Default number of attempts
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Delay between retries in milliseconds
const RETRY_DELAY_MS: u64 = 500;

const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API client
#[derive(Clone)]
pub struct AiClient {
    api_key: String,
    model: String,
    max_tokens: u32,
    http: reqwest::Client,
}

/// Anthropic API response structure
#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

/// Anthropic API error response
#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl AiClient {
    /// Create a new client with explicit API key
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 256,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from environment variable ANTHROPIC_API_KEY
    pub fn from_env() -> AiResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| AiError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Set the model to use
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Suggest titles for a piece of content (with retries)
    pub async fn suggest_titles(&self, content: &str) -> AiResult<Vec<String>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut last_error = None;

        for attempt in 1..=DEFAULT_MAX_RETRIES {
            match self.try_suggest(content).await {
                Ok(titles) => return Ok(titles),
                Err(e) => {
                    eprintln!("   ⚠️  Attempt {}/{} failed: {}", attempt, DEFAULT_MAX_RETRIES, e);
                    last_error = Some(e);

                    if attempt < DEFAULT_MAX_RETRIES {
                        tokio::time::sleep(tokio::time::Duration::from_millis(RETRY_DELAY_MS)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AiError::ApiError("Unknown error".to_string())))
    }

    /// Single attempt
    async fn try_suggest(&self, content: &str) -> AiResult<Vec<String>> {
        let response = self.call_api(content).await?;
        parse_suggestions(&response)
    }

    /// Call Anthropic API
    async fn call_api(&self, content: &str) -> AiResult<String> {
        println!("   📡 Requesting title suggestions ({})", self.model);

        let request_body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": 0.7,
            "system": prompt::system_prompt(SUGGESTION_COUNT),
            "messages": prompt::build_messages(content)
        });

        let response = self
            .http
            .post(API_URL)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiError::HttpError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::HttpError(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<AnthropicError>(&body) {
                return Err(AiError::ApiError(error.error.message));
            }
            return Err(AiError::ApiError(format!("HTTP {}: {}", status, body)));
        }

        let response: AnthropicResponse =
            serde_json::from_str(&body).map_err(|e| AiError::InvalidResponse(e.to_string()))?;

        let text = response
            .content
            .iter()
            .filter(|c| c.content_type == "text")
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(AiError::InvalidResponse("Empty response".to_string()));
        }

        Ok(text)
    }
}

/// Suggest titles, degrading every failure (including a missing client) to an empty list.
pub async fn suggest_titles_or_empty(client: Option<&AiClient>, content: &str) -> Vec<String> {
    let Some(client) = client else {
        println!("   ℹ️  No AI client configured, returning no suggestions");
        return Vec::new();
    };

    match client.suggest_titles(content).await {
        Ok(titles) => titles,
        Err(e) => {
            eprintln!("   ❌ Title suggestions failed: {}", e);
            Vec::new()
        }
    }
}

/// Parse a list of titles from a model response
fn parse_suggestions(response: &str) -> AiResult<Vec<String>> {
    let json_str = extract_json_array(response);

    let raw: Vec<String> = serde_json::from_str(&json_str).map_err(|e| {
        AiError::InvalidResponse(format!(
            "{}. Response was: {}",
            e,
            response.chars().take(200).collect::<String>()
        ))
    })?;

    let mut titles: Vec<String> = Vec::with_capacity(raw.len());
    for title in raw {
        let title = title.trim().trim_matches('"').trim().to_string();
        if !title.is_empty() && !titles.iter().any(|t| t.eq_ignore_ascii_case(&title)) {
            titles.push(title);
        }
    }
    titles.truncate(SUGGESTION_COUNT);

    Ok(titles)
}

/// Extract a JSON array from a response that may contain markdown code blocks
fn extract_json_array(text: &str) -> String {
    // Fenced block first
    if let Some(start) = text.find("```") {
        let after_start = start + 3;
        let content_start = text[after_start..]
            .find('\n')
            .map(|i| after_start + i + 1)
            .unwrap_or(after_start);

        if let Some(end) = text[content_start..].find("```") {
            return text[content_start..content_start + end].trim().to_string();
        }
    }

    // Raw array
    if let Some(start) = text.find('[') {
        if let Some(end) = text.rfind(']') {
            if start < end {
                return text[start..=end].to_string();
            }
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_array_from_code_block() {
        let response = "Here you go:\n\n```json\n[\"A\", \"B\"]\n```\n";
        assert_eq!(extract_json_array(response), "[\"A\", \"B\"]");
    }

    #[test]
    fn test_extract_raw_array() {
        let response = "Sure! [\"One\", \"Two\"] hope that helps";
        assert_eq!(extract_json_array(response), "[\"One\", \"Two\"]");
    }

    #[test]
    fn test_parse_suggestions_trims_dedupes_and_caps() {
        let response = r#"["  Bike pooling ", "bike pooling", "", "Dorm docks", "Ride groups", "Campus wheels", "Extra"]"#;
        let titles = parse_suggestions(response).unwrap();
        assert_eq!(
            titles,
            vec!["Bike pooling", "Dorm docks", "Ride groups", "Campus wheels"]
        );
    }

    #[test]
    fn test_parse_suggestions_rejects_prose() {
        let err = parse_suggestions("I cannot help with that.").unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_client_degrades_to_empty() {
        let titles = suggest_titles_or_empty(None, "some content").await;
        assert!(titles.is_empty());
    }

    #[tokio::test]
    async fn test_blank_content_skips_api_call() {
        let client = AiClient::new("unused".to_string());
        let titles = client.suggest_titles("   ").await.unwrap();
        assert!(titles.is_empty());
    }
}
