//! The request-facing layer: validates input, runs generation, persists the
//! result, and maps every failure onto a client-visible status.

use serde::Serialize;
use thiserror::Error;

use crate::generator::StoryGenerator;
use crate::story::quiz::{QuizError, QuizScore, score_answers};
use crate::story::{NewStory, StoryRecord, StorySummary, Topic, TopicError};
use crate::store::StoryStore;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input or a failed generation. Resubmitting may help.
    #[error("{0}")]
    Unprocessable(String),

    #[error("Story not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP-equivalent status code.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Unprocessable(_) => 422,
            ApiError::NotFound => 404,
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<TopicError> for ApiError {
    fn from(e: TopicError) -> Self {
        ApiError::Unprocessable(e.to_string())
    }
}

impl From<QuizError> for ApiError {
    fn from(e: QuizError) -> Self {
        ApiError::Unprocessable(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReceipt {
    pub message: String,
    pub story_id: i64,
}

pub struct StoryService {
    generator: StoryGenerator,
    store: Box<dyn StoryStore>,
}

impl StoryService {
    pub fn new(generator: StoryGenerator, store: Box<dyn StoryStore>) -> Self {
        Self { generator, store }
    }

    pub fn generator(&self) -> &StoryGenerator {
        &self.generator
    }

    /// Generate a story for `topic` and store it.
    pub async fn generate(&self, topic: &str) -> Result<GenerationReceipt, ApiError> {
        let topic = Topic::new(topic)?;
        let story = self
            .generator
            .generate(&topic)
            .await
            .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

        let new = NewStory::new(story, &topic, self.generator.model_used());
        let story_id = self
            .store
            .create(new)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to generate story: {e:#}")))?;

        tracing::info!(story_id, %topic, "story generated");
        Ok(GenerationReceipt {
            message: "Story generated successfully".to_string(),
            story_id,
        })
    }

    pub async fn list(&self) -> Result<Vec<StorySummary>, ApiError> {
        self.store
            .list()
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to fetch stories: {e:#}")))
    }

    pub async fn get(&self, id: i64) -> Result<StoryRecord, ApiError> {
        self.store
            .get(id)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to fetch story: {e:#}")))?
            .ok_or(ApiError::NotFound)
    }

    /// Grade `answers` (one option index per question) for story `id`.
    pub async fn check_answers(&self, id: i64, answers: &[usize]) -> Result<QuizScore, ApiError> {
        let story = self.get(id).await?;
        Ok(score_answers(&story.questions, answers)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::Unprocessable("x".to_string()).status(), 422);
        assert_eq!(ApiError::NotFound.status(), 404);
        assert_eq!(ApiError::Internal("x".to_string()).status(), 500);
    }

    #[test]
    fn topic_errors_are_unprocessable() {
        let err = ApiError::from(TopicError::TooShort(1));
        assert_eq!(err.status(), 422);
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ApiError::NotFound.to_string(), "Story not found");
    }
}
