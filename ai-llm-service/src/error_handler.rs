//! Unified error handling for `ai-llm-service`.
//!
//! A single top-level [`AiLlmError`] wraps domain-specific enums for config
//! loading ([`ConfigError`]) and provider calls ([`ProviderError`]). Small
//! helpers for reading/validating environment variables return the unified
//! [`Result<T>`] alias.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, AiLlmError>;

/// Top-level error for the `ai-llm-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AiLlmError {
    /// Configuration/validation errors (credential, endpoint, numbers).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Provider-call errors (bad status, undecodable body, empty output).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Underlying HTTP transport error (e.g., `reqwest::Error`).
    #[error("transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

impl AiLlmError {
    /// True when the failure is a missing credential rather than an upstream
    /// problem. The API layer uses this to report misconfiguration without
    /// ever having attempted an outbound call.
    pub fn is_missing_credential(&self) -> bool {
        matches!(
            self,
            AiLlmError::Config(ConfigError::MissingVar(_))
                | AiLlmError::Provider(ProviderError::MissingApiKey)
        )
    }
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (like limits or timeouts).
    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("invalid format in {var}: {reason}")]
    InvalidFormat {
        var: &'static str,
        reason: &'static str,
    },
}

/// Error enum for chat-completion calls against the provider.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The config carried no API key.
    #[error("provider API key is not configured")]
    MissingApiKey,

    /// The endpoint is empty or does not start with http/https.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Upstream returned a non-successful HTTP status.
    #[error("HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),

    /// The completion came back with no choices to read content from.
    #[error("provider returned no choices")]
    EmptyChoices,
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// [`ConfigError::MissingVar`] if the variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Reads an optional env var, treating empty values as unset.
pub fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// [`ConfigError::InvalidNumber`] if the variable is set but not a valid `u32`.
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u32>().map(Some).map_err(|_| {
            AiLlmError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Clamps an upstream response body into a single-line log/error snippet.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 300;
    let flat: String = body
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let trimmed = flat.trim();
    if trimmed.len() <= MAX {
        trimmed.to_string()
    } else {
        let mut cut = MAX;
        while !trimmed.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…", &trimmed[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_flattens_and_truncates() {
        let short = make_snippet("line one\nline two");
        assert_eq!(short, "line one line two");

        let long = make_snippet(&"x".repeat(1000));
        assert!(long.chars().count() <= 301);
        assert!(long.ends_with('…'));
    }

    #[test]
    fn missing_credential_is_recognized() {
        let err = AiLlmError::from(ProviderError::MissingApiKey);
        assert!(err.is_missing_credential());

        let other = AiLlmError::from(ProviderError::EmptyChoices);
        assert!(!other.is_missing_credential());
    }
}
