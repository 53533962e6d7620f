//! YandexGPT completion client.
//!
//! Speaks the foundation-models completion REST API: a `modelUri` derived
//! from the cloud folder, fixed sampling options, and a (system, user)
//! message pair. Response parsing goes through an explicit schema — a 2xx
//! body that does not carry `result.alternatives[0].message.text` is a
//! malformed response, never an empty plan.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::{PlanError, Result};
use crate::models::{EventRequest, PlanUpdateRequest};
use crate::prompt::{build_generate_prompt, build_update_prompt, Message};

use super::PlanGenerator;

/// Fixed model name appended to the folder-scoped model URI.
const MODEL_NAME: &str = "yandexgpt";

/// Sampling temperature for plan generation.
const TEMPERATURE: f64 = 0.3;

/// Upper bound on generated tokens per completion.
const MAX_TOKENS: u32 = 1000;

// ── Wire format ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionRequest {
    model_uri: String,
    completion_options: CompletionOptions,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionOptions {
    temperature: f64,
    max_tokens: u32,
}

/// Response envelope. Every level defaults so shape validation happens in
/// [`extract_plan_text`], not as an opaque deserialization error.
#[derive(Debug, Default, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    result: Option<CompletionResult>,
}

#[derive(Debug, Default, Deserialize)]
struct CompletionResult {
    #[serde(default)]
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Default, Deserialize)]
struct Alternative {
    #[serde(default)]
    message: Option<AlternativeMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct AlternativeMessage {
    #[serde(default)]
    text: Option<String>,
}

/// Walk the expected path `result -> alternatives[0] -> message -> text`.
///
/// Any missing link yields [`PlanError::MalformedResponse`]; an empty string
/// at the end of an intact path is a valid (if useless) plan.
fn extract_plan_text(response: CompletionResponse) -> Result<String> {
    response
        .result
        .and_then(|r| r.alternatives.into_iter().next())
        .and_then(|a| a.message)
        .and_then(|m| m.text)
        .ok_or(PlanError::MalformedResponse)
}

// ── Provider ─────────────────────────────────────────────────────────────────

/// Completion client for the YandexGPT HTTP endpoint.
pub struct YandexGptProvider {
    completion_url: String,
    api_key: String,
    model_uri: String,
    client: Client,
}

impl std::fmt::Debug for YandexGptProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YandexGptProvider")
            .field("completion_url", &self.completion_url)
            .field("api_key", &"[REDACTED]")
            .field("model_uri", &self.model_uri)
            .finish()
    }
}

impl YandexGptProvider {
    /// Build a provider from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| PlanError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            completion_url: config.completion_url.clone(),
            api_key: config.api_key.clone(),
            model_uri: format!("gpt://{}/{}", config.folder_id, MODEL_NAME),
            client,
        })
    }

    fn build_request(&self, messages: Vec<Message>) -> CompletionRequest {
        CompletionRequest {
            model_uri: self.model_uri.clone(),
            completion_options: CompletionOptions {
                temperature: TEMPERATURE,
                max_tokens: MAX_TOKENS,
            },
            messages,
        }
    }

    /// Send one completion round-trip and extract the generated text.
    ///
    /// Public so the smoke-test binary can issue ad-hoc queries outside the
    /// plan-generation path.
    pub async fn complete(&self, messages: Vec<Message>) -> Result<String> {
        let body = self.build_request(messages);
        debug!(model_uri = %self.model_uri, "sending completion request");

        let response = self
            .client
            .post(&self.completion_url)
            .header("Accept", "application/json")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| PlanError::Upstream(format!("completion request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlanError::Upstream(format!(
                "completion endpoint returned {status}: {error_text}"
            )));
        }

        let envelope: CompletionResponse = response
            .json()
            .await
            .map_err(|e| PlanError::Upstream(format!("failed to read completion body: {e}")))?;

        extract_plan_text(envelope)
    }
}

#[async_trait]
impl PlanGenerator for YandexGptProvider {
    async fn generate_plan(&self, req: &EventRequest) -> Result<String> {
        self.complete(build_generate_prompt(req)).await
    }

    async fn update_plan(&self, req: &PlanUpdateRequest) -> Result<String> {
        self.complete(build_update_prompt(req)).await
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::from_lookup(|var| {
            match var {
                "YC_URL" => Some("https://llm.example/completion".into()),
                "YC_API_KEY" => Some("secret".into()),
                "YC_FOLDER_ID" => Some("b1folder".into()),
                _ => None,
            }
        })
        .unwrap()
    }

    fn parse(body: &str) -> CompletionResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_request_body_wire_format() {
        let provider = YandexGptProvider::from_config(&test_config()).unwrap();
        let request = provider.build_request(vec![Message::user("hello")]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["modelUri"], "gpt://b1folder/yandexgpt");
        assert_eq!(json["completionOptions"]["temperature"], 0.3);
        assert_eq!(json["completionOptions"]["maxTokens"], 1000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["text"], "hello");
    }

    #[test]
    fn test_extract_normal_response() {
        let envelope = parse(
            r#"{"result":{"alternatives":[{"message":{"role":"assistant","text":"A fine plan"}}]}}"#,
        );
        assert_eq!(extract_plan_text(envelope).unwrap(), "A fine plan");
    }

    #[test]
    fn test_extract_uses_first_alternative() {
        let envelope = parse(
            r#"{"result":{"alternatives":[
                {"message":{"text":"first"}},
                {"message":{"text":"second"}}
            ]}}"#,
        );
        assert_eq!(extract_plan_text(envelope).unwrap(), "first");
    }

    #[test]
    fn test_empty_alternatives_is_malformed() {
        let envelope = parse(r#"{"result":{"alternatives":[]}}"#);
        assert!(matches!(
            extract_plan_text(envelope),
            Err(PlanError::MalformedResponse)
        ));
    }

    #[test]
    fn test_missing_result_is_malformed() {
        let envelope = parse(r#"{"error":"quota exceeded"}"#);
        assert!(matches!(
            extract_plan_text(envelope),
            Err(PlanError::MalformedResponse)
        ));
    }

    #[test]
    fn test_missing_message_text_is_malformed() {
        let envelope = parse(r#"{"result":{"alternatives":[{"message":{"role":"assistant"}}]}}"#);
        assert!(matches!(
            extract_plan_text(envelope),
            Err(PlanError::MalformedResponse)
        ));
    }

    #[test]
    fn test_empty_string_text_is_a_valid_plan() {
        let envelope = parse(r#"{"result":{"alternatives":[{"message":{"text":""}}]}}"#);
        assert_eq!(extract_plan_text(envelope).unwrap(), "");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let provider = YandexGptProvider::from_config(&test_config()).unwrap();
        let rendered = format!("{provider:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
