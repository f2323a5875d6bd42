pub mod quiz;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{TOPIC_MAX_CHARS, TOPIC_MIN_CHARS};

/// Why a topic string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("topic must be at least 3 characters (got {0})")]
    TooShort(usize),
    #[error("topic must be at most 200 characters (got {0})")]
    TooLong(usize),
}

/// A caller-supplied story topic, 3 to 200 characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    pub fn new(topic: impl Into<String>) -> Result<Self, TopicError> {
        let topic = topic.into();
        let len = topic.chars().count();
        if len < TOPIC_MIN_CHARS {
            return Err(TopicError::TooShort(len));
        }
        if len > TOPIC_MAX_CHARS {
            return Err(TopicError::TooLong(len));
        }
        Ok(Self(topic))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A multiple-choice question about a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensionQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_answer: usize,
}

impl ComprehensionQuestion {
    pub fn new(question: &str, options: [&str; 4], correct_answer: usize) -> Self {
        Self {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
        }
    }
}

/// One generated story with its comprehension questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStory {
    pub title: String,
    pub content: String,
    pub questions: Vec<ComprehensionQuestion>,
}

/// What the store needs to persist a generated story.
#[derive(Debug, Clone)]
pub struct NewStory {
    pub title: String,
    pub content: String,
    pub topic: String,
    pub questions: Vec<ComprehensionQuestion>,
    pub model_used: String,
}

impl NewStory {
    pub fn new(story: GeneratedStory, topic: &Topic, model_used: &str) -> Self {
        Self {
            title: story.title,
            content: story.content,
            topic: topic.as_str().to_string(),
            questions: story.questions,
            model_used: model_used.to_string(),
        }
    }
}

/// A persisted story, as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub topic: String,
    pub questions: Vec<ComprehensionQuestion>,
    pub model_used: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// List view of a persisted story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorySummary {
    pub id: i64,
    pub title: String,
    pub topic: String,
    pub created_at: String,
}
