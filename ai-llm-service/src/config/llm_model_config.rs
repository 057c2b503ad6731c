/// Configuration for an LLM model invocation.
///
/// Covers the generation parameters the recommendation call needs. New
/// backends or knobs extend this struct rather than adding parallel config
/// types.
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// Model identifier string (e.g., `"gpt-4o-mini"`).
    pub model: String,

    /// API base URL (e.g., `"https://api.openai.com"`).
    pub endpoint: String,

    /// API key for authentication. `None` means the credential was not
    /// configured; the service constructor rejects such configs.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
