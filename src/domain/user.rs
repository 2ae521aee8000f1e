//! Account domain model

use super::common::StringUuid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Account kind: controls dashboard routing and admin-gated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Customer,
    Admin,
}

/// Privilege tier within the admin console. A `superadmin` account can
/// never be deleted and is the only tier allowed to remove other admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AdminRole {
    #[default]
    Admin,
    Superadmin,
}

/// Account entity. The password hash never crosses the API boundary;
/// responses use [`PublicUser`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: StringUuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub user_type: UserType,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }

    pub fn is_superadmin(&self) -> bool {
        self.role == AdminRole::Superadmin
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: StringUuid::new_v4(),
            first_name: String::new(),
            last_name: String::new(),
            full_name: String::new(),
            email: String::new(),
            password_hash: String::new(),
            phone: None,
            address: None,
            user_type: UserType::default(),
            role: AdminRole::default(),
            created_at: Utc::now(),
        }
    }
}

/// Public-safe account projection (password hash stripped)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: StringUuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub user_type: UserType,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            user_type: user.user_type,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Self-registration input. The account kind is always forced to
/// `customer`; admin accounts are created through the admin console only.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub phone: Option<String>,
}

/// Admin-console account creation input; may set the account kind.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountInput {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub phone: Option<String>,
    pub user_type: Option<UserType>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update: the only mutable fields an account holder controls.
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileInput {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Repository input for a new account (hash already computed)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub user_type: UserType,
    pub role: AdminRole,
}
