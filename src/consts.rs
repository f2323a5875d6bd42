//! Project-wide constants.

use std::path::PathBuf;
use std::time::Duration;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Provider model used on the live path.
pub const DEFAULT_MODEL: &str = "anthropic/claude-3.5-sonnet";

/// OpenRouter-compatible chat-completion API root.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Recorded as `model_used` for stories produced without a provider.
pub const MOCK_MODEL: &str = "mock";

/// Credential value reserved for test environments. Forces the mock path.
pub const TEST_MODE_KEY: &str = "test-mode";

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const USE_MOCK_ENV: &str = "USE_MOCK_LLM";
pub const LOG_ENV: &str = "MASAL_LOG";

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 2000;

/// Overall deadline for one provider request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Artificial latency of the mock generator.
pub const MOCK_DELAY: Duration = Duration::from_secs(2);

/// Accepted topic length, in characters.
pub const TOPIC_MIN_CHARS: usize = 3;
pub const TOPIC_MAX_CHARS: usize = 200;

/// Default database path: `~/.masal/masal.db`.
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".masal")
        .join("masal.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!AUTHOR.is_empty());
        assert!(!HOMEPAGE.is_empty());
        assert!(!REPO.is_empty());
        assert!(!DEFAULT_MODEL.is_empty());
    }

    #[test]
    fn consts_from_cargo_toml() {
        assert!(AUTHOR.contains("Assaf Sapir"));
        assert!(REPO.contains("github.com/assapir/masal"));
    }

    #[test]
    fn topic_bounds_are_ordered() {
        assert!(TOPIC_MIN_CHARS < TOPIC_MAX_CHARS);
    }

    #[test]
    fn default_db_path_ends_with_db_file() {
        let path = default_db_path();
        assert!(path.ends_with(".masal/masal.db"));
    }
}
