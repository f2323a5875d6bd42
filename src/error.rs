//! Error taxonomy for story generation.
//!
//! Provider and response failures are classified separately so callers can
//! tell "could not reach the provider" apart from "the provider replied with
//! something unusable". [`GenerationError`] is the only one of these that
//! leaves the generator.

use std::time::Duration;

use thiserror::Error;

/// No credential configured and mock mode not enabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("OPENROUTER_API_KEY is required, or set USE_MOCK_LLM=true")]
pub struct ConfigurationError;

/// Failure contacting the completion provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to provider failed: {0}")]
    Transport(String),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider did not respond within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("provider returned an unreadable completion: {0}")]
    InvalidBody(String),

    #[error("provider returned no completion choices")]
    NoChoices,
}

/// The provider answered, but not with a usable story.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("LLM returned invalid JSON format: {0}")]
    Malformed(String),

    #[error("LLM response missing required field: {field}")]
    Incomplete { field: String },
}

/// Any live-path failure, as seen by the caller.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to generate story: {0}")]
    Provider(#[from] ProviderError),

    #[error("failed to generate story: {0}")]
    Response(#[from] ResponseError),
}

impl GenerationError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Provider(ProviderError::Timeout(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_both_switches() {
        let msg = ConfigurationError.to_string();
        assert!(msg.contains("OPENROUTER_API_KEY"));
        assert!(msg.contains("USE_MOCK_LLM=true"));
    }

    #[test]
    fn incomplete_names_field() {
        let err = GenerationError::from(ResponseError::Incomplete {
            field: "questions".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "failed to generate story: LLM response missing required field: questions"
        );
    }

    #[test]
    fn timeout_message_in_seconds() {
        let err = ProviderError::Timeout(Duration::from_secs(60));
        assert_eq!(err.to_string(), "provider did not respond within 60s");
        assert!(GenerationError::from(err).is_timeout());
    }

    #[test]
    fn status_is_not_timeout() {
        let err = GenerationError::from(ProviderError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        });
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn invalid_body_is_a_provider_failure() {
        let err = ProviderError::InvalidBody("expected value".to_string());
        let err = GenerationError::from(err);
        assert!(matches!(err, GenerationError::Provider(_)));
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("unreadable completion"));
    }
}
