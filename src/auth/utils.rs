use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::UserRole,
};

/// Server-side role check for code administration. Hiding admin controls in
/// the UI is not a security boundary; this is the enforcement point.
pub fn require_admin(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Admin {
        return Err(AppError::Unauthorized(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_claims(account_id: &str, role: UserRole) -> Claims {
        Claims {
            sub: account_id.to_string(),
            role,
            iat: 0,
            exp: 9999999999,
        }
    }

    #[test]
    fn test_require_admin_success() {
        let claims = create_test_claims("admin", UserRole::Admin);
        assert!(require_admin(&claims).is_ok());
    }

    #[test]
    fn test_require_admin_rejects_teacher() {
        let claims = create_test_claims("teacher", UserRole::Teacher);
        assert!(require_admin(&claims).is_err());
    }

    #[test]
    fn test_require_admin_rejects_parent() {
        let claims = create_test_claims("parent", UserRole::Parent);
        assert!(require_admin(&claims).is_err());
    }
}
