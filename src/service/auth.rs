//! Registration, login, and profile self-service

use crate::crypto::password;
use crate::domain::{
    AdminRole, LoginInput, NewUser, PublicUser, RegisterInput, StringUuid, UpdateProfileInput,
    UserType,
};
use crate::error::{AppError, Result};
use crate::jwt::JwtManager;
use crate::repository::UserRepository;
use std::sync::Arc;
use validator::Validate;

pub struct AuthService<R: UserRepository> {
    users: Arc<R>,
    jwt: JwtManager,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(users: Arc<R>, jwt: JwtManager) -> Self {
        Self { users, jwt }
    }

    /// Create a customer account and issue an access token.
    ///
    /// Self-registration always produces a customer; the admin console is
    /// the only path that can mint admin accounts.
    pub async fn register(&self, input: RegisterInput) -> Result<(String, PublicUser)> {
        input.validate()?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict(
                "Email already registered. Please login instead.".to_string(),
            ));
        }

        let password_hash = password::hash_password(&input.password)?;
        let new_user = NewUser {
            full_name: format!("{} {}", input.first_name, input.last_name),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password_hash,
            phone: input.phone,
            address: None,
            user_type: UserType::Customer,
            role: AdminRole::Admin,
        };

        let user = self.users.create(&new_user).await?;
        let token = self.jwt.create_access_token(user.id, &user.email)?;
        Ok((token, user.into()))
    }

    /// Verify credentials and issue an access token.
    pub async fn login(&self, input: LoginInput) -> Result<(String, PublicUser)> {
        input.validate()?;

        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("User not found. Please register first.".to_string())
            })?;

        if !password::verify_password(&input.password, &user.password_hash) {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = self.jwt.create_access_token(user.id, &user.email)?;
        Ok((token, user.into()))
    }

    /// Fetch the caller's own profile.
    pub async fn me(&self, user_id: StringUuid) -> Result<PublicUser> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }

    /// Update the caller's own profile. Omitted fields are left unchanged.
    pub async fn update_profile(
        &self,
        user_id: StringUuid,
        input: UpdateProfileInput,
    ) -> Result<PublicUser> {
        let user = self.users.update_profile(user_id, &input).await?;
        Ok(user.into())
    }
}
