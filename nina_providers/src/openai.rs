use std::time::Duration;

use async_trait::async_trait;
use nina_core::{ChatMessage, LLMProvider, LLMResponse, Usage};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for OpenAI-compatible `/chat/completions` endpoints.
///
/// Sends exactly one request per call; failures are returned to the caller.
#[derive(Clone)]
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    temperature: f32,
    max_tokens: usize,
}

impl OpenAIProvider {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        info!("Creating OpenAIProvider");
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.6,
            max_tokens: 512,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn build_request(&self, messages: &[ChatMessage], model: &str) -> Value {
        json!({
            "model": model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }
}

/// Extract the reply and usage from a completion response.
///
/// A null or absent content is read as an empty reply.
fn parse_response(response: &Value) -> anyhow::Result<LLMResponse> {
    let message = response["choices"][0]
        .get("message")
        .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing choices"))?;

    let content = message["content"].as_str().unwrap_or_default().to_string();

    let usage = response["usage"].as_object().map(|u| Usage {
        prompt_tokens: token_count(&u["prompt_tokens"]),
        completion_tokens: token_count(&u["completion_tokens"]),
        total_tokens: token_count(&u["total_tokens"]),
    });

    Ok(LLMResponse { content, usage })
}

fn token_count(value: &Value) -> u32 {
    u32::try_from(value.as_u64().unwrap_or(0)).unwrap_or(0)
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> anyhow::Result<LLMResponse> {
        let request = self.build_request(messages, model);

        info!("Sending request to completion API: model={}", model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        let response = parse_response(&response)?;
        info!("Received response from completion API");
        Ok(response)
    }

    fn get_default_model(&self) -> &'static str {
        "gpt-4o-mini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_sampling_options() {
        let provider = OpenAIProvider::new("key".to_string())
            .with_temperature(0.6)
            .with_max_tokens(300);
        let request = provider.build_request(
            &[ChatMessage::system("sys"), ChatMessage::user("oi")],
            "gpt-4o-mini",
        );

        assert_eq!(request["model"], "gpt-4o-mini");
        assert_eq!(request["max_tokens"], 300);
        assert_eq!(request["messages"][0]["role"], "system");
        assert_eq!(request["messages"][1]["content"], "oi");
        let temperature = request["temperature"].as_f64().unwrap();
        assert!((temperature - 0.6).abs() < 1e-6);
    }

    #[test]
    fn parses_content_and_usage() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": "Olá!"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
        });

        let parsed = parse_response(&response).unwrap();
        assert_eq!(parsed.content, "Olá!");
        assert_eq!(parsed.usage.unwrap().total_tokens, 13);
    }

    #[test]
    fn null_content_is_empty_reply() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        });

        let parsed = parse_response(&response).unwrap();
        assert!(parsed.content.is_empty());
        assert!(parsed.usage.is_none());
    }

    #[test]
    fn missing_choices_is_error() {
        assert!(parse_response(&json!({"error": "boom"})).is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let provider = OpenAIProvider::new("key".to_string())
            .with_base_url("http://localhost:8080/v1/".to_string());
        assert_eq!(provider.base_url, "http://localhost:8080/v1");
    }
}
