//! PostgreSQL implementation of the click ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::domain::repositories::{AttributedClick, ClickCounts, ClickFilter, ClickRepository};
use crate::error::AppError;

/// PostgreSQL repository for the append-only click ledger.
///
/// Click timestamps come from the column default (`NOW()`), never from the caller.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AttributedClickRow {
    id: i64,
    clicked_at: DateTime<Utc>,
    ip: String,
    user_agent: String,
    token: String,
    recipient_id: Option<i64>,
    email: Option<String>,
}

impl From<AttributedClickRow> for AttributedClick {
    fn from(r: AttributedClickRow) -> Self {
        AttributedClick {
            click: ClickEvent::new(
                r.id,
                r.clicked_at,
                r.ip,
                r.user_agent,
                r.token,
                r.recipient_id,
            ),
            email: r.email,
        }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClickEvent) -> Result<ClickEvent, AppError> {
        let click = sqlx::query_as::<_, ClickEvent>(
            r#"
            INSERT INTO clicks (ip, user_agent, token, recipient_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, clicked_at, ip, user_agent, token, recipient_id
            "#,
        )
        .bind(&new_click.ip)
        .bind(&new_click.user_agent)
        .bind(&new_click.token)
        .bind(new_click.recipient_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(click)
    }

    async fn list(&self, filter: ClickFilter) -> Result<Vec<AttributedClick>, AppError> {
        // LIMIT NULL means no limit.
        let rows = sqlx::query_as::<_, AttributedClickRow>(
            r#"
            SELECT
                c.id,
                c.clicked_at,
                c.ip,
                c.user_agent,
                c.token,
                c.recipient_id,
                r.email
            FROM clicks c
            LEFT JOIN recipients r ON r.id = c.recipient_id
            ORDER BY c.id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(AttributedClick::from).collect())
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM clicks WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn counts(&self) -> Result<ClickCounts, AppError> {
        let counts = sqlx::query_as::<_, ClickCounts>(
            r#"
            SELECT
                COUNT(*) AS total_clicks,
                COUNT(DISTINCT recipient_id) AS unique_clicked_links
            FROM clicks
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(counts)
    }
}
