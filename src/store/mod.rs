pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;

use crate::story::{NewStory, StoryRecord, StorySummary};

/// Where generated stories live. Records are written once and never updated.
#[async_trait]
pub trait StoryStore: Send + Sync {
    /// Persist a story and return its new id.
    async fn create(&self, story: NewStory) -> Result<i64>;
    async fn get(&self, id: i64) -> Result<Option<StoryRecord>>;
    /// All stories, newest first.
    async fn list(&self) -> Result<Vec<StorySummary>>;
}
