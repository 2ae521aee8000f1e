//! Contact message store

use crate::domain::{ContactMessage, StringUuid, SubmitContactInput};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, input: &SubmitContactInput) -> Result<ContactMessage>;
}

pub struct ContactRepositoryImpl {
    pool: MySqlPool,
}

impl ContactRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryImpl {
    async fn create(&self, input: &SubmitContactInput) -> Result<ContactMessage> {
        let id = StringUuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO contact_messages (id, name, email, message, created_at)
            VALUES (?, ?, ?, ?, NOW())
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.message)
        .execute(&self.pool)
        .await?;

        let saved = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, message, created_at
            FROM contact_messages
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        saved.ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to save contact message")))
    }
}
