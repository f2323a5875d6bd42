use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::ProviderError;

use super::Provider;

/// A scripted provider for tests. Returns pre-defined replies in order and
/// counts how often it was asked.
pub struct ScriptedProvider {
    replies: Mutex<Vec<Result<String, ProviderError>>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(mut replies: Vec<Result<String, ProviderError>>) -> Self {
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            calls: AtomicUsize::new(0),
        }
    }

    /// Answers once with `text`.
    pub fn reply(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// Fails once with `err`.
    pub fn fail(err: ProviderError) -> Self {
        Self::new(vec![Err(err)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        replies.pop().unwrap_or_else(|| {
            Err(ProviderError::Transport(format!(
                "ScriptedProvider: no more replies (called {n} times)"
            )))
        })
    }
}
