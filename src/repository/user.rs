//! Account store

use crate::domain::{NewUser, StringUuid, UpdateProfileInput, User};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, input: &NewUser) -> Result<User>;
    async fn find_by_id(&self, id: StringUuid) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn list(&self) -> Result<Vec<User>>;
    async fn update_profile(&self, id: StringUuid, input: &UpdateProfileInput) -> Result<User>;
    async fn delete(&self, id: StringUuid) -> Result<()>;
}

pub struct UserRepositoryImpl {
    pool: MySqlPool,
}

impl UserRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, first_name, last_name, full_name, email, password_hash, phone, address, user_type, role, created_at";

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, input: &NewUser) -> Result<User> {
        let id = StringUuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, full_name, email, password_hash, phone, address, user_type, role, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NOW())
            "#,
        )
        .bind(id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(input.user_type)
        .bind(input.role)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            super::conflict_on_duplicate(err, "Email already registered. Please login instead.")
        })?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create user")))
    }

    async fn find_by_id(&self, id: StringUuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update_profile(&self, id: StringUuid, input: &UpdateProfileInput) -> Result<User> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        // Fields omitted from the request keep their stored values.
        let full_name = input.full_name.as_ref().unwrap_or(&existing.full_name);
        let phone = input.phone.as_ref().or(existing.phone.as_ref());
        let address = input.address.as_ref().or(existing.address.as_ref());

        sqlx::query(
            r#"
            UPDATE users
            SET full_name = ?, phone = ?, address = ?
            WHERE id = ?
            "#,
        )
        .bind(full_name)
        .bind(phone)
        .bind(address)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to update user")))
    }

    async fn delete(&self, id: StringUuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }
}
