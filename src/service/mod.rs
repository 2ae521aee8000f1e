//! Business logic layer

pub mod auth;
pub mod booking;
pub mod contact;
pub mod user;

pub use auth::AuthService;
pub use booking::BookingService;
pub use contact::ContactService;
pub use user::AccountService;
