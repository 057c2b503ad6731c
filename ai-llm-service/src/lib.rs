//! Shared LLM client for the quiz backend.
//!
//! One provider (an OpenAI-style `/v1/chat/completions` endpoint), one
//! operation (a single non-streaming completion), env-driven configuration,
//! and unified `thiserror` error types.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::default_config::config_openai_recommender;
pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{AiLlmError, ConfigError, ProviderError};
pub use services::open_ai_service::OpenAiService;
