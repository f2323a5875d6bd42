pub mod mock;
pub mod parse;

use crate::config::{GenerationMode, Settings};
use crate::consts::MOCK_MODEL;
use crate::error::{ConfigurationError, GenerationError, ProviderError};
use crate::prompts::story::build_story_prompt;
use crate::provider::Provider;
use crate::provider::openrouter::OpenRouterProvider;
use crate::story::{GeneratedStory, Topic};

use mock::MockGenerator;
use parse::parse_story;

enum Backend {
    Mock(MockGenerator),
    Live {
        provider: Box<dyn Provider>,
        model: String,
    },
}

/// Entry point for story generation. Picks the mock or live path once,
/// at construction, from the given [`Settings`].
pub struct StoryGenerator {
    backend: Backend,
}

impl StoryGenerator {
    /// Build a generator that talks to the configured provider over HTTP.
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let backend = match settings.mode()? {
            GenerationMode::Mock => Backend::Mock(MockGenerator::new(settings.mock_delay)),
            GenerationMode::Live { api_key } => {
                let provider = OpenRouterProvider::new(
                    &settings.base_url,
                    &settings.model,
                    &api_key,
                    settings.timeout,
                )?;
                Backend::Live {
                    provider: Box::new(provider),
                    model: settings.model,
                }
            }
        };
        Ok(Self { backend })
    }

    /// Build a generator with an injected provider. The provider is only
    /// used if the settings select the live path.
    pub fn with_provider(
        settings: Settings,
        provider: Box<dyn Provider>,
    ) -> Result<Self, ConfigurationError> {
        let backend = match settings.mode()? {
            GenerationMode::Mock => Backend::Mock(MockGenerator::new(settings.mock_delay)),
            GenerationMode::Live { .. } => Backend::Live {
                provider,
                model: settings.model,
            },
        };
        Ok(Self { backend })
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.backend, Backend::Mock(_))
    }

    /// What gets recorded as `model_used` for stories from this generator.
    pub fn model_used(&self) -> &str {
        match &self.backend {
            Backend::Mock(_) => MOCK_MODEL,
            Backend::Live { model, .. } => model,
        }
    }

    /// Generate a story for `topic`. Live-path failures are never retried
    /// and never fall back to the mock generator.
    pub async fn generate(&self, topic: &Topic) -> Result<GeneratedStory, GenerationError> {
        match &self.backend {
            Backend::Mock(mock) => {
                tracing::debug!(%topic, "generating mock story");
                Ok(mock.generate(topic).await)
            }
            Backend::Live { provider, model } => {
                tracing::debug!(%topic, %model, "generating story");
                let prompt = build_story_prompt(topic);
                let text = provider.complete(&prompt).await.inspect_err(|e| match e {
                    ProviderError::Timeout(_) => tracing::error!("timeout calling LLM API"),
                    other => tracing::error!(error = %other, "error calling LLM API"),
                })?;
                let story = parse_story(&text).inspect_err(|e| {
                    tracing::error!(error = %e, raw = %text, "unusable LLM response");
                })?;
                Ok(story)
            }
        }
    }
}
