//! OpenAI-style service for recommendation text generation.
//!
//! Minimal, non-streaming client around the REST API. The endpoint is
//! derived from `LlmModelConfig::endpoint`:
//! - POST {endpoint}/v1/chat/completions — chat completion (non-streaming)
//!
//! Constructor validation:
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://
//!
//! Errors are normalized via the unified types in `error_handler`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{AiLlmError, ProviderError, make_snippet},
};

/// Thin client for an OpenAI-style chat-completion API.
///
/// Constructed from a complete [`LlmModelConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (with timeout and default headers).
#[derive(Debug)]
pub struct OpenAiService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// Validation happens here, before any network activity: a config with
    /// no API key never produces a client that could make an outbound call.
    ///
    /// # Errors
    /// - [`ProviderError::MissingApiKey`] if `cfg.api_key` is `None`
    /// - [`ProviderError::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        let api_key = cfg.api_key.clone().ok_or(ProviderError::MissingApiKey)?;

        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ProviderError::InvalidEndpoint(cfg.endpoint.clone()).into());
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                ProviderError::Decode(format!("invalid API key header: {e}"))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_chat = format!("{}/v1/chat/completions", base);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs.unwrap_or(60),
            "OpenAiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Performs a **non-streaming** chat completion request.
    ///
    /// The `messages` array is minimal: an optional system message followed
    /// by the user `prompt`. The request asks for a JSON-object response
    /// (`response_format: json_object`) since the caller expects a single
    /// well-formed JSON document back.
    ///
    /// # Errors
    /// - [`ProviderError::HttpStatus`] for non-2xx responses
    /// - [`AiLlmError::HttpTransport`] for client/network failures
    /// - [`ProviderError::Decode`] if the JSON cannot be parsed
    /// - [`ProviderError::EmptyChoices`] if no choices are returned
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt, system);

        debug!(
            model = %self.cfg.model,
            endpoint = %self.cfg.endpoint,
            prompt_len = prompt.len(),
            has_system = system.is_some(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );

            return Err(ProviderError::HttpStatus {
                status,
                url,
                snippet,
            }
            .into());
        }

        let out: ChatCompletionResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode chat completion response"
                );
                return Err(ProviderError::Decode(format!(
                    "serde error: {e}; expected `choices[0].message.content`"
                ))
                .into());
            }
        };

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or(ProviderError::EmptyChoices)?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Minimal request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds a minimal chat request from config, `prompt`, and an optional
    /// system message.
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str, system: Option<&'a str>) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(sys) = system {
            messages.push(ChatMessage {
                role: "system",
                content: sys,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        Self {
            model: &cfg.model,
            messages,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    /// One of: "system" | "user" | "assistant".
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

/// Minimal response for `/v1/chat/completions`.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(api_key: Option<&str>, endpoint: &str) -> LlmModelConfig {
        LlmModelConfig {
            model: "gpt-4o-mini".into(),
            endpoint: endpoint.into(),
            api_key: api_key.map(Into::into),
            max_tokens: Some(512),
            temperature: Some(0.4),
            timeout_secs: Some(5),
        }
    }

    #[test]
    fn missing_api_key_fails_before_any_network_activity() {
        let err = OpenAiService::new(cfg(None, "https://api.openai.com")).unwrap_err();
        assert!(err.is_missing_credential());
    }

    #[test]
    fn invalid_endpoint_scheme_is_rejected() {
        let err = OpenAiService::new(cfg(Some("sk-test"), "ftp://nope")).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Provider(ProviderError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn request_body_carries_json_response_format() {
        let config = cfg(Some("sk-test"), "https://api.openai.com");
        let body = ChatCompletionRequest::from_cfg(&config, "the transcript", Some("the rules"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "the transcript");
        assert_eq!(json["max_tokens"], 512);
    }

    #[test]
    fn trailing_slash_is_normalized_in_chat_url() {
        let svc = OpenAiService::new(cfg(Some("sk-test"), "https://api.openai.com/")).unwrap();
        assert_eq!(svc.url_chat, "https://api.openai.com/v1/chat/completions");
    }
}
