use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};

use super::StoryStore;
use crate::story::{NewStory, StoryRecord, StorySummary};

/// SQLite-backed story storage.
pub struct SqliteStoryStore {
    conn: Mutex<Connection>,
}

impl SqliteStoryStore {
    /// Open or create the stories table in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open story database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS stories (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                title      TEXT NOT NULL,
                content    TEXT NOT NULL,
                topic      TEXT NOT NULL,
                questions  TEXT NOT NULL,
                model_used TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now')),
                updated_at TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_stories_title ON stories (title);",
        )
        .context("failed to create stories table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl StoryStore for SqliteStoryStore {
    async fn create(&self, story: NewStory) -> Result<i64> {
        let questions = serde_json::to_string(&story.questions)?;
        let conn = self.conn();
        conn.execute(
            "INSERT INTO stories (title, content, topic, questions, model_used)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                story.title,
                story.content,
                story.topic,
                questions,
                story.model_used
            ],
        )
        .context("failed to insert story")?;
        Ok(conn.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Option<StoryRecord>> {
        let conn = self.conn();
        let row = conn
            .query_row(
                "SELECT id, title, content, topic, questions, model_used, created_at, updated_at
                 FROM stories WHERE id = ?1",
                [id],
                |row| {
                    Ok((
                        StoryRecord {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            content: row.get(2)?,
                            topic: row.get(3)?,
                            questions: Vec::new(),
                            model_used: row.get(5)?,
                            created_at: row.get(6)?,
                            updated_at: row.get(7)?,
                        },
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((mut record, questions)) => {
                record.questions = serde_json::from_str(&questions)
                    .with_context(|| format!("corrupt questions for story {id}"))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<StorySummary>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, title, topic, created_at FROM stories
             ORDER BY created_at DESC, id DESC",
        )?;
        let summaries = stmt
            .query_map([], |row| {
                Ok(StorySummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    topic: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(summaries)
    }
}
