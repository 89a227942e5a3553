use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    repositories::AccessCodeRepository,
};

/// Shown to the viewer whenever a submitted code matches no active row. A
/// wrong code and an unknown quiz read the same from the outside.
pub const INVALID_CODE_MESSAGE: &str = "Please enter a valid access code";

/// The access gate. Stateless per attempt: blank input is rejected locally on
/// every submit without touching storage, anything else is checked against the
/// active codes for the target quiz. There is no retry limit and no lockout.
pub struct AccessGateService {
    codes: Arc<dyn AccessCodeRepository>,
}

impl AccessGateService {
    pub fn new(codes: Arc<dyn AccessCodeRepository>) -> Self {
        Self { codes }
    }

    /// Case-sensitive check of `raw_code` against the active codes for
    /// `quiz_id`. Ok(()) means the caller may unlock the session.
    pub async fn verify_code(&self, quiz_id: &str, raw_code: &str) -> AppResult<()> {
        let code = raw_code.trim();
        if code.is_empty() {
            return Err(AppError::ValidationError(
                "Access code must not be empty".to_string(),
            ));
        }

        let matched = self.codes.find_active_code(quiz_id, code).await?;

        match matched {
            Some(access_code) => {
                log::info!(
                    "Access code accepted for quiz {} (code id {})",
                    quiz_id,
                    access_code.id
                );
                Ok(())
            }
            None => {
                log::info!("Access code rejected for quiz {}", quiz_id);
                Err(AppError::Unauthorized(INVALID_CODE_MESSAGE.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::AccessCode;
    use crate::repositories::access_code_repository::MockAccessCodeRepository;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_empty_code_never_reaches_storage() {
        let mut repo = MockAccessCodeRepository::new();
        repo.expect_find_active_code().times(0);

        let gate = AccessGateService::new(Arc::new(repo));

        let result = gate.verify_code("quiz-2", "").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_whitespace_code_revalidates_on_every_submit() {
        let mut repo = MockAccessCodeRepository::new();
        repo.expect_find_active_code().times(0);

        let gate = AccessGateService::new(Arc::new(repo));

        // Same blank input twice must trigger the validation error both times
        for _ in 0..2 {
            let result = gate.verify_code("quiz-2", "   ").await;
            assert!(matches!(result, Err(AppError::ValidationError(_))));
        }
    }

    #[tokio::test]
    async fn test_matching_code_is_accepted() {
        let mut repo = MockAccessCodeRepository::new();
        repo.expect_find_active_code()
            .with(eq("quiz-2"), eq("SPRING24"))
            .returning(|quiz_id, code| Ok(Some(AccessCode::issue(quiz_id, code, "admin-1"))));

        let gate = AccessGateService::new(Arc::new(repo));

        assert!(gate.verify_code("quiz-2", "SPRING24").await.is_ok());
    }

    #[tokio::test]
    async fn test_code_is_trimmed_before_lookup() {
        let mut repo = MockAccessCodeRepository::new();
        repo.expect_find_active_code()
            .with(eq("quiz-2"), eq("SPRING24"))
            .returning(|quiz_id, code| Ok(Some(AccessCode::issue(quiz_id, code, "admin-1"))));

        let gate = AccessGateService::new(Arc::new(repo));

        assert!(gate.verify_code("quiz-2", "  SPRING24  ").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_code_is_rejected_with_generic_message() {
        let mut repo = MockAccessCodeRepository::new();
        repo.expect_find_active_code().returning(|_, _| Ok(None));

        let gate = AccessGateService::new(Arc::new(repo));

        let result = gate.verify_code("quiz-2", "WRONG").await;
        match result {
            Err(AppError::Unauthorized(message)) => assert_eq!(message, INVALID_CODE_MESSAGE),
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut repo = MockAccessCodeRepository::new();
        repo.expect_find_active_code()
            .returning(|_, _| Err(AppError::DatabaseError("connection reset".to_string())));

        let gate = AccessGateService::new(Arc::new(repo));

        let result = gate.verify_code("quiz-2", "SPRING24").await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
