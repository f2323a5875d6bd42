use std::time::Duration;

use masal::config::Settings;
use masal::error::ProviderError;
use masal::generator::StoryGenerator;
use masal::provider::scripted::ScriptedProvider;
use masal::service::{ApiError, StoryService};
use masal::store::StoryStore;
use masal::store::sqlite::SqliteStoryStore;

fn mock_service() -> StoryService {
    let settings = Settings::default()
        .with_mock(true)
        .with_mock_delay(Duration::ZERO);
    let generator =
        StoryGenerator::with_provider(settings, Box::new(ScriptedProvider::new(vec![]))).unwrap();
    StoryService::new(generator, Box::new(SqliteStoryStore::in_memory().unwrap()))
}

fn live_service(provider: ScriptedProvider) -> StoryService {
    let settings = Settings::default().with_api_key("sk-or-real");
    let generator = StoryGenerator::with_provider(settings, Box::new(provider)).unwrap();
    StoryService::new(generator, Box::new(SqliteStoryStore::in_memory().unwrap()))
}

/// A store whose every operation fails.
struct BrokenStore;

#[async_trait::async_trait]
impl StoryStore for BrokenStore {
    async fn create(&self, _story: masal::story::NewStory) -> anyhow::Result<i64> {
        anyhow::bail!("disk full")
    }
    async fn get(&self, _id: i64) -> anyhow::Result<Option<masal::story::StoryRecord>> {
        anyhow::bail!("disk full")
    }
    async fn list(&self) -> anyhow::Result<Vec<masal::story::StorySummary>> {
        anyhow::bail!("disk full")
    }
}

#[tokio::test]
async fn generate_persists_story() {
    let service = mock_service();
    let receipt = service.generate("uzayda bir robot").await.unwrap();
    assert_eq!(receipt.message, "Story generated successfully");

    let record = service.get(receipt.story_id).await.unwrap();
    assert_eq!(record.title, "Uzayda Yaşayan Robot Arkadaş");
    assert_eq!(record.topic, "uzayda bir robot");
    assert_eq!(record.model_used, "mock");
    assert_eq!(record.questions.len(), 3);
}

#[tokio::test]
async fn list_shows_generated_stories() {
    let service = mock_service();
    service.generate("deniz").await.unwrap();
    service.generate("robot").await.unwrap();

    let stories = service.list().await.unwrap();
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].topic, "robot");
    assert_eq!(stories[1].title, "Deniz Hakkında Bir Hikaye");
}

#[tokio::test]
async fn short_topic_is_unprocessable() {
    let service = mock_service();
    let err = service.generate("ab").await.unwrap_err();
    assert_eq!(err.status(), 422);
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn long_topic_is_unprocessable() {
    let service = mock_service();
    let err = service.generate(&"x".repeat(201)).await.unwrap_err();
    assert_eq!(err.status(), 422);
}

#[tokio::test]
async fn missing_story_is_not_found() {
    let service = mock_service();
    let err = service.get(99).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(err.status(), 404);
}

#[tokio::test]
async fn generation_failure_is_unprocessable_and_stores_nothing() {
    let service = live_service(ScriptedProvider::reply("not json"));
    let err = service.generate("orman").await.unwrap_err();
    assert_eq!(err.status(), 422);
    assert!(err.to_string().contains("invalid JSON"));
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn provider_outage_is_unprocessable() {
    let service = live_service(ScriptedProvider::fail(ProviderError::Transport(
        "connection refused".to_string(),
    )));
    let err = service.generate("orman").await.unwrap_err();
    assert_eq!(err.status(), 422);
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn live_story_records_provider_model() {
    let service = live_service(ScriptedProvider::reply(
        r#"{"title": "Orman", "content": "c", "questions": []}"#,
    ));
    let receipt = service.generate("orman").await.unwrap();
    let record = service.get(receipt.story_id).await.unwrap();
    assert_eq!(record.model_used, "anthropic/claude-3.5-sonnet");
}

#[tokio::test]
async fn storage_failure_is_internal() {
    let settings = Settings::default()
        .with_mock(true)
        .with_mock_delay(Duration::ZERO);
    let generator =
        StoryGenerator::with_provider(settings, Box::new(ScriptedProvider::new(vec![]))).unwrap();
    let service = StoryService::new(generator, Box::new(BrokenStore));

    let err = service.generate("deniz").await.unwrap_err();
    assert_eq!(err.status(), 500);
    assert!(err.to_string().contains("disk full"));
    assert_eq!(service.list().await.unwrap_err().status(), 500);
    assert_eq!(service.get(1).await.unwrap_err().status(), 500);
}

#[tokio::test]
async fn quiz_scores_mock_story() {
    let service = mock_service();
    let receipt = service.generate("uzayda bir robot").await.unwrap();

    let perfect = service
        .check_answers(receipt.story_id, &[0, 1, 1])
        .await
        .unwrap();
    assert_eq!((perfect.correct, perfect.total), (3, 3));

    let partial = service
        .check_answers(receipt.story_id, &[0, 0, 0])
        .await
        .unwrap();
    assert_eq!(partial.correct, 1);
}

#[tokio::test]
async fn quiz_requires_every_answer() {
    let service = mock_service();
    let receipt = service.generate("deniz").await.unwrap();
    let err = service
        .check_answers(receipt.story_id, &[1])
        .await
        .unwrap_err();
    assert_eq!(err.status(), 422);
}

#[tokio::test]
async fn quiz_on_missing_story_is_not_found() {
    let service = mock_service();
    let err = service.check_answers(5, &[0, 1, 1]).await.unwrap_err();
    assert_eq!(err.status(), 404);
}
