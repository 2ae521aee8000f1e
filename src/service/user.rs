//! Admin-side account management

use crate::crypto::password;
use crate::domain::{AdminRole, CreateAccountInput, NewUser, PublicUser, StringUuid, User};
use crate::error::{AppError, Result};
use crate::policy;
use crate::repository::UserRepository;
use std::sync::Arc;
use validator::Validate;

pub struct AccountService<R: UserRepository> {
    users: Arc<R>,
}

impl<R: UserRepository> AccountService<R> {
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Resolve the authenticated caller's account. A verified token whose
    /// account has since been deleted is an authentication failure, not a
    /// lookup miss.
    pub async fn resolve_caller(&self, id: StringUuid) -> Result<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Account no longer exists".to_string()))
    }

    /// All accounts, newest first.
    pub async fn list(&self) -> Result<Vec<PublicUser>> {
        let users = self.users.list().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    /// Create an account from the admin console. Unlike self-registration
    /// this path may mint admin accounts, but never a superadmin.
    pub async fn create(&self, input: CreateAccountInput) -> Result<PublicUser> {
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
            user_type: input.user_type.unwrap_or_default(),
            role: AdminRole::Admin,
        };

        let user = self.users.create(&new_user).await?;
        Ok(user.into())
    }

    /// Delete an account, subject to the deletion policy.
    pub async fn delete(&self, caller: &User, target_id: StringUuid) -> Result<()> {
        let target = self
            .users
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        policy::ensure_can_delete_account(caller, &target)?;
        self.users.delete(target_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserType;
    use crate::repository::user::MockUserRepository;
    use pretty_assertions::assert_eq;

    fn create_input(user_type: Option<UserType>) -> CreateAccountInput {
        CreateAccountInput {
            first_name: "Bibek".to_string(),
            last_name: "Shrestha".to_string(),
            email: "bibek@example.com".to_string(),
            password: "secret123".to_string(),
            phone: None,
            user_type,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_customer() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(|input| {
            assert_eq!(input.user_type, UserType::Customer);
            assert_eq!(input.role, AdminRole::Admin);
            let mut user = User::default();
            user.user_type = input.user_type;
            Ok(user)
        });

        let service = AccountService::new(Arc::new(repo));
        let user = service.create(create_input(None)).await.unwrap();
        assert_eq!(user.user_type, UserType::Customer);
    }

    #[tokio::test]
    async fn test_create_can_mint_admin_but_not_superadmin() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(|input| {
            assert_eq!(input.user_type, UserType::Admin);
            // The console can grant admin, never superadmin.
            assert_eq!(input.role, AdminRole::Admin);
            let mut user = User::default();
            user.user_type = input.user_type;
            user.role = input.role;
            Ok(user)
        });

        let service = AccountService::new(Arc::new(repo));
        service
            .create(create_input(Some(UserType::Admin)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_duplicate_email_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(User::default())));

        let service = AccountService::new(Arc::new(repo));
        let err = service.create(create_input(None)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_superadmin_refused_before_store_call() {
        let target_id = StringUuid::new_v4();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| {
            Ok(Some(User {
                user_type: UserType::Admin,
                role: AdminRole::Superadmin,
                ..User::default()
            }))
        });
        // No expect_delete: reaching the store would panic the mock.

        let caller = User {
            user_type: UserType::Admin,
            role: AdminRole::Superadmin,
            ..User::default()
        };
        let service = AccountService::new(Arc::new(repo));
        let err = service.delete(&caller, target_id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_delete_customer_by_admin() {
        let target_id = StringUuid::new_v4();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(User::default())));
        repo.expect_delete().returning(|_| Ok(()));

        let caller = User {
            user_type: UserType::Admin,
            ..User::default()
        };
        let service = AccountService::new(Arc::new(repo));
        service.delete(&caller, target_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_target_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let caller = User {
            user_type: UserType::Admin,
            ..User::default()
        };
        let service = AccountService::new(Arc::new(repo));
        let err = service
            .delete(&caller, StringUuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_resolve_caller_deleted_account_is_unauthorized() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repo));
        let err = service
            .resolve_caller(StringUuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_list_maps_to_public_view() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![User::default(), User::default()]));

        let service = AccountService::new(Arc::new(repo));
        let users = service.list().await.unwrap();
        assert_eq!(users.len(), 2);
    }
}
