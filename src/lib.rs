//! FastSewa Core - Booking Marketplace Backend
//!
//! This crate provides the backend for the FastSewa service marketplace:
//! account registration and login, category-based service bookings with a
//! status lifecycle, an admin console API, and public contact intake.

pub mod api;
pub mod config;
pub mod crypto;
pub mod domain;
pub mod email;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod policy;
pub mod repository;
pub mod server;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
