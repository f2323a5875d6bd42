pub mod openrouter;
pub mod scripted;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProviderError;

/// Something that turns a prompt into raw completion text.
/// The real implementation talks HTTP; tests script the replies.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Arc<P> {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        (**self).complete(prompt).await
    }
}
