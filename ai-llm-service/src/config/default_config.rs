//! Default LLM config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY` = API credential (**required**, read per request)
//! - `OPENAI_MODEL`   = model identifier (default `gpt-4o-mini`)
//! - `OPENAI_URL`     = API base URL (default `https://api.openai.com`)
//! - `LLM_MAX_TOKENS` = optional max tokens (u32)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{Result, env_opt, env_opt_u32, must_env},
};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Constructs the config for the recommendation model.
///
/// Called per `/api/quiz/submit` request so the credential is always read
/// from the current process environment, never cached across requests.
///
/// # Defaults
/// - `temperature = Some(0.4)`
/// - `timeout_secs = Some(60)`
///
/// # Errors
/// [`crate::ConfigError::MissingVar`] when `OPENAI_API_KEY` is absent, and
/// [`crate::ConfigError::InvalidNumber`] for a malformed `LLM_MAX_TOKENS`.
pub fn config_openai_recommender() -> Result<LlmModelConfig> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = env_opt("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let endpoint = env_opt("OPENAI_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.4),
        timeout_secs: Some(60),
    })
}
