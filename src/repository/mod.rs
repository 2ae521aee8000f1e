//! Data access layer
//!
//! Each store is a trait so services can be tested against mocks, with a
//! sqlx/MySQL implementation behind it.

use crate::error::AppError;

pub mod booking;
pub mod contact;
pub mod user;

pub use booking::{BookingRepository, BookingRepositoryImpl};
pub use contact::{ContactRepository, ContactRepositoryImpl};
pub use user::{UserRepository, UserRepositoryImpl};

/// Translate a unique-key insert failure into a Conflict.
///
/// The services check for an existing email before inserting, but two
/// concurrent writers can both pass that check; the UNIQUE index then
/// rejects the second INSERT, and it must surface as the same 409 the
/// pre-check produces.
pub(crate) fn conflict_on_duplicate(err: sqlx::Error, message: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(message.to_string())
        }
        _ => err.into(),
    }
}
