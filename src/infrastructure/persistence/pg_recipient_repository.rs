//! PostgreSQL implementation of the recipient repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRecipient, Recipient};
use crate::domain::repositories::{CreateRecipientOutcome, RecipientRepository};
use crate::error::AppError;
use crate::utils::db_error::unique_violation_constraint;

const EMAIL_CONSTRAINT: &str = "recipients_email_key";
const TOKEN_CONSTRAINT: &str = "recipients_token_key";

/// PostgreSQL repository for recipients.
///
/// Email and token uniqueness are enforced by named unique constraints and
/// detected on insert, so concurrent registrations cannot both succeed.
pub struct PgRecipientRepository {
    pool: Arc<PgPool>,
}

impl PgRecipientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipientRepository for PgRecipientRepository {
    async fn create(
        &self,
        new_recipient: NewRecipient,
    ) -> Result<CreateRecipientOutcome, AppError> {
        let result = sqlx::query_as::<_, Recipient>(
            r#"
            INSERT INTO recipients (email, token)
            VALUES ($1, $2)
            RETURNING id, email, token, created_at
            "#,
        )
        .bind(&new_recipient.email)
        .bind(&new_recipient.token)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(recipient) => Ok(CreateRecipientOutcome::Created(recipient)),
            Err(e) => match unique_violation_constraint(&e).as_deref() {
                Some(EMAIL_CONSTRAINT) => Ok(CreateRecipientOutcome::DuplicateEmail),
                Some(TOKEN_CONSTRAINT) => Ok(CreateRecipientOutcome::TokenTaken),
                _ => Err(e.into()),
            },
        }
    }

    async fn find_id_by_token(&self, token: &str) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM recipients WHERE token = $1")
            .bind(token)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Recipient>, AppError> {
        let rows = sqlx::query_as::<_, Recipient>(
            r#"
            SELECT id, email, token, created_at
            FROM recipients
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM recipients WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recipients")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
