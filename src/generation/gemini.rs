//! Gemini `generateContent` client.

use super::TextGenerator;
use crate::api::client::extract_response_text;
use crate::constants::GEMINI_BASE_URL;
use crate::error::AppError;
use crate::types::{ApiKey, ModelName};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Process-wide generation client, constructed once and shared by reference.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: ModelName,
}

impl GeminiClient {
    /// Creates a client against the public Gemini endpoint.
    pub fn new(api_key: &ApiKey, model: ModelName) -> Result<Self, AppError> {
        Self::with_base_url(api_key, model, GEMINI_BASE_URL)
    }

    /// Creates a client against an explicit base URL.
    pub fn with_base_url(
        api_key: &ApiKey,
        model: ModelName,
        base_url: impl Into<String>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model,
        })
    }

    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let mut key = header::HeaderValue::from_str(api_key.as_str()).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid API key format: {}", e))
        })?;
        key.set_sensitive(true);
        headers.insert("x-goog-api-key", key);

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            self.model.as_str()
        );
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        log::debug!("POST {}", url);
        let response = self.client.post(url).json(&body).send().await?;
        let result = extract_response_text(response).await?;

        if !result.status.is_success() {
            return Err(AppError::generation(format!(
                "{} returned {}: {}",
                self.model, result.status, result.data
            )));
        }

        parse_generated_text(&result.data)
    }
}

/// Concatenates the text parts of the first candidate.
fn parse_generated_text(body: &str) -> Result<String, AppError> {
    let response: GenerateResponse = serde_json::from_str(body)?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AppError::generation("response contained no text"));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_of_first_candidate_are_joined() {
        let body = r##"{"candidates":[{"content":{"parts":[{"text":"# T"},{"text":"itle\nbody"}]}},
                      {"content":{"parts":[{"text":"other"}]}}]}"##;
        assert_eq!(parse_generated_text(body).unwrap(), "# Title\nbody");
    }

    #[test]
    fn blocked_response_without_text_is_an_error() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        assert!(matches!(
            parse_generated_text(body),
            Err(AppError::Generation { .. })
        ));
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            parse_generated_text("<html>"),
            Err(AppError::MalformedResponse(_))
        ));
    }
}
