//! Process configuration, read once at startup.
//!
//! [`Settings`] is built at the entry point and handed to the generator by
//! value. Nothing in the library reads the environment after that.

use std::time::Duration;

use crate::consts::{
    API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, MOCK_DELAY, REQUEST_TIMEOUT, TEST_MODE_KEY,
    USE_MOCK_ENV,
};
use crate::error::ConfigurationError;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub use_mock: bool,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub mock_delay: Duration,
}

/// Which path story generation takes for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationMode {
    Mock,
    Live { api_key: String },
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            use_mock: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: REQUEST_TIMEOUT,
            mock_delay: MOCK_DELAY,
        }
    }
}

impl Settings {
    /// Read settings from the environment, loading `./.env` first if present.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = get(API_KEY_ENV).filter(|k| !k.is_empty());
        let use_mock = get(USE_MOCK_ENV)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            api_key,
            use_mock,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_mock(mut self, use_mock: bool) -> Self {
        self.use_mock = use_mock;
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }

    /// Decide the generation path.
    ///
    /// Mock when forced, when no key is set, or when the key is the
    /// test-mode sentinel. Having neither a key nor mock mode is a
    /// configuration error.
    pub fn mode(&self) -> Result<GenerationMode, ConfigurationError> {
        match (&self.api_key, self.use_mock) {
            (None, false) => Err(ConfigurationError),
            (_, true) => Ok(GenerationMode::Mock),
            (Some(key), false) if key == TEST_MODE_KEY => Ok(GenerationMode::Mock),
            (Some(key), false) => Ok(GenerationMode::Live {
                api_key: key.clone(),
            }),
        }
    }
}
