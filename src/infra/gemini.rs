//! Gemini client for note refinement (Google Generative Language API).

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};

use crate::domain::{RefineError, RefinedNote};
use crate::infra::app_config::NoteflowConfig;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// The refinement collaborator: raw notes in, structured suggestion out.
#[async_trait]
pub trait NoteRefiner: Send + Sync {
    async fn refine(&self, notes: &str) -> Result<RefinedNote, RefineError>;
}

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiConfig {
    /// Resolves the configuration from the environment and the app config.
    ///
    /// `GEMINI_API_KEY` and `GEMINI_BASE_URL` take precedence over the config
    /// file; the model falls back to the default flash model.
    pub fn resolve(config: &NoteflowConfig) -> Result<Self, RefineError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| config.gemini_api_key.clone())
            .ok_or(RefineError::MissingApiKey)?;

        let base_url = std::env::var("GEMINI_BASE_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .or_else(|| config.gemini_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_url(&base_url)?;

        let model = config
            .gemini_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}

/// Gemini client.
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<Value, RefineError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let request = build_request(prompt);

        let response = self
            .http
            .post(&url)
            .headers(build_headers(&self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RefineError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| RefineError::MalformedPayload(e.to_string()))
    }
}

#[async_trait]
impl NoteRefiner for GeminiClient {
    async fn refine(&self, notes: &str) -> Result<RefinedNote, RefineError> {
        let prompt = crate::prompts::render("refine_note", &json!({ "notes": notes }))
            .map_err(RefineError::OperationFailed)?;

        let response = self.generate(&prompt).await?;
        let text = extract_text(&response)?;
        parse_refined(&text)
    }
}

fn build_request(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{"text": prompt}]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "title": {"type": "STRING"},
                    "content": {"type": "STRING"},
                    "tags": {"type": "ARRAY", "items": {"type": "STRING"}}
                },
                "required": ["title", "content", "tags"]
            }
        }
    })
}

fn build_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers
}

/// Classifies a reqwest error into a RefineError.
fn classify_reqwest_error(e: reqwest::Error) -> RefineError {
    if e.is_timeout() {
        RefineError::Transport(format!("request timed out: {e}"))
    } else if e.is_connect() {
        RefineError::Transport(format!("connection failed: {e}"))
    } else {
        RefineError::Transport(format!("network error: {e}"))
    }
}

fn validate_url(url: &str) -> Result<(), RefineError> {
    url::Url::parse(url)
        .map(|_| ())
        .map_err(|e| RefineError::Transport(format!("invalid Gemini base URL '{url}': {e}")))
}

/// Pulls the first candidate's text part out of a generateContent response.
fn extract_text(response: &Value) -> Result<String, RefineError> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            RefineError::MalformedPayload("response has no candidate text part".to_string())
        })
}

/// Parses and validates the structured suggestion.
///
/// The contract is strict: a JSON object with a title string, a content
/// string, and 2 to 3 non-empty tag strings. Anything else is a failure,
/// never a partial success.
pub fn parse_refined(text: &str) -> Result<RefinedNote, RefineError> {
    let refined: RefinedNote = serde_json::from_str(text)
        .map_err(|e| RefineError::MalformedPayload(format!("suggestion is not valid JSON: {e}")))?;

    if !(2..=3).contains(&refined.tags.len()) {
        return Err(RefineError::MalformedPayload(format!(
            "expected 2 to 3 tags, got {}",
            refined.tags.len()
        )));
    }
    if refined.tags.iter().any(|t| t.trim().is_empty()) {
        return Err(RefineError::MalformedPayload(
            "tags must be non-empty strings".to_string(),
        ));
    }

    Ok(refined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_refined_accepts_the_contract_shape() {
        let refined = parse_refined(
            r#"{"title":"To-Do","content":"- Buy milk\n- Call mom","tags":["tasks","personal"]}"#,
        )
        .unwrap();
        assert_eq!(refined.title, "To-Do");
        assert_eq!(refined.body, "- Buy milk\n- Call mom");
        assert_eq!(refined.tags, ["tasks", "personal"]);
    }

    #[test]
    fn parse_refined_rejects_wrong_tag_count() {
        let one = r#"{"title":"t","content":"c","tags":["only"]}"#;
        assert!(matches!(
            parse_refined(one),
            Err(RefineError::MalformedPayload(_))
        ));

        let four = r#"{"title":"t","content":"c","tags":["a","b","c","d"]}"#;
        assert!(parse_refined(four).is_err());
    }

    #[test]
    fn parse_refined_rejects_missing_fields_and_non_json() {
        assert!(parse_refined(r#"{"title":"t","tags":["a","b"]}"#).is_err());
        assert!(parse_refined("not json at all").is_err());
        assert!(parse_refined(r#"{"title":"t","content":"c","tags":["a",""]}"#).is_err());
    }

    #[test]
    fn extract_text_reads_first_candidate() {
        let response = serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"ok\":true}"}]}
            }]
        });
        assert_eq!(extract_text(&response).unwrap(), "{\"ok\":true}");
        assert!(extract_text(&serde_json::json!({})).is_err());
    }
}
