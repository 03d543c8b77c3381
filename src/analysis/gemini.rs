//! HTTP client for the Gemini `generateContent` API.
//!
//! The model is asked for a JSON object with exactly the three fields of
//! [`AnalysisResult`]; the response text is parsed straight into it.

use chrono::Local;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;

use super::{build_prompt, AnalysisError, AnalysisFuture, TrendAnalyzer};
use crate::models::{AnalysisResult, Language, MoodLogEntry};

pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("no response text from Gemini")]
    EmptyResponse,

    #[error("malformed analysis: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<GeminiError> for AnalysisError {
    fn from(e: GeminiError) -> Self {
        AnalysisError::Unavailable(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    language: Language,
    client: Client,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
            language: Language::Ja,
            client: Client::new(),
        }
    }

    /// Language the summary and advice are written in.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn request_body(&self, prompt: &str) -> Value {
        let (summary, advice, dominant) = match self.language {
            Language::Ja => (
                "日本語での要約",
                "日本語でのアドバイス",
                "支配的な色/気分を表す単語（例：'青', '赤', 'グレー'など）",
            ),
            Language::En => (
                "Summary in English",
                "Advice in English",
                "A word for the dominant color/mood (e.g. 'blue', 'red', 'grey')",
            ),
        };

        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "summary": { "type": "STRING", "description": summary },
                        "advice": { "type": "STRING", "description": advice },
                        "dominantColor": { "type": "STRING", "description": dominant }
                    },
                    "required": ["summary", "advice", "dominantColor"]
                }
            }
        })
    }

    pub async fn generate(&self, entries: &[MoodLogEntry]) -> Result<AnalysisResult, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;
        let prompt = build_prompt(entries, self.language, &Local);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&self.request_body(&prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let body: Value = response.json().await?;
        parse_response(&body)
    }
}

impl TrendAnalyzer for GeminiClient {
    fn analyze<'a>(&'a self, entries: &'a [MoodLogEntry]) -> AnalysisFuture<'a> {
        Box::pin(async move { self.generate(entries).await.map_err(AnalysisError::from) })
    }
}

/// Extracts the analysis from a `generateContent` response body.
pub fn parse_response(body: &Value) -> Result<AnalysisResult, GeminiError> {
    let text = body["candidates"][0]["content"]["parts"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|part| part["text"].as_str())
        .collect::<String>();

    if text.trim().is_empty() {
        return Err(GeminiError::EmptyResponse);
    }

    Ok(serde_json::from_str(text.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_candidate_text() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "{\"summary\":\"s\",\"advice\":\"a\",\"dominantColor\":\"青\"}" }]
                }
            }]
        });
        let result = parse_response(&body).unwrap();
        assert_eq!(result.summary, "s");
        assert_eq!(result.advice, "a");
        assert_eq!(result.dominant_color, "青");
    }

    #[test]
    fn joins_split_parts() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "{\"summary\":\"s\"," },
                        { "text": "\"advice\":\"a\",\"dominantColor\":\"red\"}" }
                    ]
                }
            }]
        });
        assert_eq!(parse_response(&body).unwrap().dominant_color, "red");
    }

    #[test]
    fn missing_text_is_empty_response() {
        let body = json!({ "candidates": [] });
        assert!(matches!(parse_response(&body), Err(GeminiError::EmptyResponse)));
    }

    #[test]
    fn missing_field_is_malformed() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"summary\":\"s\"}" }] } }]
        });
        assert!(matches!(parse_response(&body), Err(GeminiError::Malformed(_))));
    }

    #[tokio::test]
    async fn without_key_fails_before_any_request() {
        let client = GeminiClient::new("http://127.0.0.1:9", None, DEFAULT_GEMINI_MODEL);
        let err = client.generate(&[]).await.unwrap_err();
        assert!(matches!(err, GeminiError::MissingApiKey));
    }

    #[test]
    fn request_body_asks_for_json_with_three_fields() {
        let client = GeminiClient::new(DEFAULT_GEMINI_URL, Some("k".into()), DEFAULT_GEMINI_MODEL)
            .with_language(Language::En);
        let body = client.request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["summary", "advice", "dominantColor"])
        );
    }
}
