//! Authorization rules
//!
//! Role checks always read the caller's record from the store rather
//! than trusting anything carried in the token, so a demoted admin
//! loses access as soon as the row changes.

use crate::domain::User;
use crate::error::{AppError, Result};

/// Gate for the admin console. Every admin endpoint applies this single
/// predicate to the resolved caller.
pub fn require_admin(caller: &User) -> Result<()> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Admin access required".to_string()))
    }
}

/// Account deletion rules:
/// - the superadmin account can never be deleted
/// - admin accounts can only be deleted by the superadmin
/// - customer accounts can be deleted by any admin
pub fn ensure_can_delete_account(caller: &User, target: &User) -> Result<()> {
    if target.is_superadmin() {
        return Err(AppError::Forbidden(
            "Superadmin account cannot be deleted".to_string(),
        ));
    }
    if target.is_admin() && !caller.is_superadmin() {
        return Err(AppError::Forbidden(
            "Only superadmin can delete admin accounts".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdminRole, UserType};

    fn user_with(user_type: UserType, role: AdminRole) -> User {
        User {
            user_type,
            role,
            ..User::default()
        }
    }

    #[test]
    fn test_require_admin() {
        let admin = user_with(UserType::Admin, AdminRole::Admin);
        let customer = user_with(UserType::Customer, AdminRole::Admin);

        assert!(require_admin(&admin).is_ok());
        assert!(matches!(
            require_admin(&customer),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_superadmin_is_undeletable() {
        let superadmin = user_with(UserType::Admin, AdminRole::Superadmin);
        let other_superadmin = user_with(UserType::Admin, AdminRole::Superadmin);

        assert!(matches!(
            ensure_can_delete_account(&other_superadmin, &superadmin),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_only_superadmin_deletes_admins() {
        let superadmin = user_with(UserType::Admin, AdminRole::Superadmin);
        let admin = user_with(UserType::Admin, AdminRole::Admin);
        let other_admin = user_with(UserType::Admin, AdminRole::Admin);

        assert!(ensure_can_delete_account(&superadmin, &admin).is_ok());
        assert!(matches!(
            ensure_can_delete_account(&other_admin, &admin),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_any_admin_deletes_customers() {
        let admin = user_with(UserType::Admin, AdminRole::Admin);
        let customer = user_with(UserType::Customer, AdminRole::Admin);

        assert!(ensure_can_delete_account(&admin, &customer).is_ok());
    }
}
