//! Domain models

pub mod booking;
pub mod common;
pub mod contact;
pub mod user;

pub use booking::{Booking, BookingStatus, CreateBookingInput, NewBooking, ServiceCategory};
pub use common::StringUuid;
pub use contact::{ContactMessage, SubmitContactInput};
pub use user::{
    AdminRole, CreateAccountInput, LoginInput, NewUser, PublicUser, RegisterInput,
    UpdateProfileInput, User, UserType,
};
