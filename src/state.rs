//! Application state trait for dependency injection
//!
//! Handlers are written against this trait, so the same routing code
//! works with the production `AppState` and with mock-backed states
//! in tests.

use crate::config::Config;
use crate::email::ContactNotifier;
use crate::jwt::JwtManager;
use crate::repository::{BookingRepository, ContactRepository, UserRepository};
use crate::service::{AccountService, AuthService, BookingService, ContactService};

/// Trait for application state that provides access to all services.
pub trait HasServices: Clone + Send + Sync + 'static {
    /// The user repository type
    type UserRepo: UserRepository;
    /// The booking repository type
    type BookingRepo: BookingRepository;
    /// The contact message repository type
    type ContactRepo: ContactRepository;
    /// The contact notifier type
    type Notifier: ContactNotifier;

    /// Get the application configuration
    fn config(&self) -> &Config;

    /// Get the authentication service
    fn auth_service(&self) -> &AuthService<Self::UserRepo>;

    /// Get the account management service
    fn account_service(&self) -> &AccountService<Self::UserRepo>;

    /// Get the booking service
    fn booking_service(&self) -> &BookingService<Self::BookingRepo>;

    /// Get the contact service
    fn contact_service(&self) -> &ContactService<Self::ContactRepo, Self::Notifier>;

    /// Get the JWT manager
    fn jwt_manager(&self) -> &JwtManager;

    /// Check if the system is ready (database is healthy)
    fn check_ready(&self) -> impl std::future::Future<Output = bool> + Send;
}
