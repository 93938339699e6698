// src/db/mod.rs

use async_trait::async_trait;
use sqlx::{query_as, Pool, Postgres};
use tracing::{debug, info};

use crate::config::Config;
use crate::models::FeedbackRecord;

pub async fn connect(config: &Config) -> anyhow::Result<Pool<Postgres>> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    info!(max_connections = config.max_connections, "connected to PostgreSQL");
    Ok(pool)
}

/// Source of feedback rows for one interview session.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// All rows for `interview_id`, ordered by row id. Empty when none exist.
    async fn fetch_for_interview(&self, interview_id: &str) -> anyhow::Result<Vec<FeedbackRecord>>;
}

pub struct PgFeedbackStore {
    pool: Pool<Postgres>,
}

impl PgFeedbackStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn fetch_for_interview(&self, interview_id: &str) -> anyhow::Result<Vec<FeedbackRecord>> {
        let rows = query_as::<_, FeedbackRecord>(
            r#"SELECT id::int8       AS id,
                      "mockIdRef"    AS interview_id,
                      question,
                      "correctAns"   AS correct_answer,
                      "userAns"      AS user_answer,
                      rating,
                      feedback,
                      "userEmail"    AS user_email,
                      "createdAt"    AS created_at
               FROM public."userAnswer"
               WHERE "mockIdRef" = $1
               ORDER BY id"#,
        )
        .bind(interview_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(interview_id, rows = rows.len(), "fetched feedback rows");
        Ok(rows)
    }
}
