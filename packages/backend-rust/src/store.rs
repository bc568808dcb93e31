//! Best-effort SQLite persistence for generated questions and answer
//! attempts. The store is optional: when `DATABASE_URL` is unset the
//! service runs fully in memory and every save becomes a no-op at the
//! call site.

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tutor_algo::{AttemptRecord, Question};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid database url: {0}")]
    Config(String),
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub struct AttemptStore {
    pool: SqlitePool,
}

impl AttemptStore {
    /// Builds a store from `DATABASE_URL`. Missing or empty means the
    /// operator opted out of persistence, which is not an error.
    pub async fn from_env() -> Result<Option<Self>, StoreError> {
        match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => Ok(Some(Self::connect(&url).await?)),
            _ => Ok(None),
        }
    }

    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Config(e.to_string()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS "questions" (
                "id" TEXT PRIMARY KEY,
                "topic" TEXT NOT NULL,
                "difficulty" REAL NOT NULL,
                "questionText" TEXT NOT NULL,
                "answer" REAL NOT NULL,
                "explanation" TEXT NOT NULL,
                "createdAt" TEXT NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS "question_attempts" (
                "id" TEXT PRIMARY KEY,
                "questionId" TEXT NOT NULL,
                "userAnswer" REAL NOT NULL,
                "isCorrect" INTEGER NOT NULL,
                "timeTakenMs" REAL NOT NULL,
                "createdAt" TEXT NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn save_question(&self, question: &Question) -> Result<String, StoreError> {
        sqlx::query(
            r#"INSERT OR REPLACE INTO "questions"
               ("id", "topic", "difficulty", "questionText", "answer", "explanation", "createdAt")
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&question.id)
        .bind(question.topic.as_str())
        .bind(question.difficulty)
        .bind(&question.question_text)
        .bind(question.answer)
        .bind(&question.explanation)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(question.id.clone())
    }

    pub async fn save_attempt(&self, attempt: &AttemptRecord) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"INSERT INTO "question_attempts"
               ("id", "questionId", "userAnswer", "isCorrect", "timeTakenMs", "createdAt")
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&id)
        .bind(&attempt.question_id)
        .bind(attempt.user_answer)
        .bind(attempt.is_correct)
        .bind(attempt.time_taken_ms)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn attempt_count(&self, question_id: &str) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM "question_attempts" WHERE "questionId" = ?"#,
        )
        .bind(question_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
