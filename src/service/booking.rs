//! Booking lifecycle

use crate::domain::{
    Booking, BookingStatus, CreateBookingInput, NewBooking, ServiceCategory, StringUuid, User,
};
use crate::error::{AppError, Result};
use crate::repository::BookingRepository;
use std::sync::Arc;

pub struct BookingService<R: BookingRepository> {
    bookings: Arc<R>,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(bookings: Arc<R>) -> Self {
        Self { bookings }
    }

    /// Submit a booking on behalf of an authenticated customer.
    ///
    /// The stored record snapshots the requester's name/email/phone at
    /// submission time; fields the payload omits are filled from the
    /// account. Status always starts at pending regardless of input.
    pub async fn create(&self, owner: &User, input: CreateBookingInput) -> Result<Booking> {
        let category: ServiceCategory = input.category.parse()?;

        let new_booking = NewBooking {
            category,
            full_name: input.full_name.or_else(|| Some(owner.full_name.clone())),
            email: input.email.or_else(|| Some(owner.email.clone())),
            phone: input.phone.or_else(|| owner.phone.clone()),
            txn_id: input.txn_id,
            message: input.message,
            monthly_income: input.monthly_income,
            monthly_expense: input.monthly_expense,
            service_type: input.service_type,
            notes: input.notes,
            selected_doc: input.selected_doc,
            book_date: input.book_date,
            time_slot: input.time_slot,
            user_id: owner.id,
            status: BookingStatus::Pending,
        };

        self.bookings.create(&new_booking).await
    }

    /// The caller's own bookings, newest first.
    pub async fn list_for_user(&self, user_id: StringUuid) -> Result<Vec<Booking>> {
        self.bookings.list_by_user(user_id).await
    }

    /// Every booking in the system, newest first. Admin console only;
    /// the handler gates access.
    pub async fn list_all(&self) -> Result<Vec<Booking>> {
        self.bookings.list().await
    }

    /// Move a booking to a new lifecycle status. The transition is checked
    /// against the stored status before any write, so an illegal request
    /// leaves the record untouched.
    pub async fn update_status(&self, id: StringUuid, status: &str) -> Result<Booking> {
        let next: BookingStatus = status.parse()?;

        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !booking.status.can_transition_to(next) {
            return Err(AppError::Validation(format!(
                "Cannot change booking status from {} to {}",
                booking.status, next
            )));
        }

        self.bookings.update_status(id, next).await
    }

    pub async fn delete(&self, id: StringUuid) -> Result<()> {
        self.bookings.delete(id).await
    }
}
