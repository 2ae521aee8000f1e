//! Booking store

use crate::domain::{Booking, BookingStatus, NewBooking, StringUuid};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, input: &NewBooking) -> Result<Booking>;
    async fn find_by_id(&self, id: StringUuid) -> Result<Option<Booking>>;
    async fn list(&self) -> Result<Vec<Booking>>;
    async fn list_by_user(&self, user_id: StringUuid) -> Result<Vec<Booking>>;
    async fn update_status(&self, id: StringUuid, status: BookingStatus) -> Result<Booking>;
    async fn delete(&self, id: StringUuid) -> Result<()>;
}

pub struct BookingRepositoryImpl {
    pool: MySqlPool,
}

impl BookingRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const BOOKING_COLUMNS: &str = "id, category, full_name, email, phone, txn_id, message, monthly_income, monthly_expense, service_type, notes, selected_doc, book_date, time_slot, user_id, status, created_at";

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, input: &NewBooking) -> Result<Booking> {
        let id = StringUuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO bookings (id, category, full_name, email, phone, txn_id, message, monthly_income, monthly_expense, service_type, notes, selected_doc, book_date, time_slot, user_id, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NOW())
            "#,
        )
        .bind(id)
        .bind(input.category)
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.txn_id)
        .bind(&input.message)
        .bind(input.monthly_income)
        .bind(input.monthly_expense)
        .bind(&input.service_type)
        .bind(&input.notes)
        .bind(&input.selected_doc)
        .bind(input.book_date)
        .bind(&input.time_slot)
        .bind(input.user_id)
        .bind(input.status)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create booking")))
    }

    async fn find_by_id(&self, id: StringUuid) -> Result<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn list(&self) -> Result<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn list_by_user(&self, user_id: StringUuid) -> Result<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = ? ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn update_status(&self, id: StringUuid, status: BookingStatus) -> Result<Booking> {
        let result = sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to update booking")))
    }

    async fn delete(&self, id: StringUuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }

        Ok(())
    }
}
