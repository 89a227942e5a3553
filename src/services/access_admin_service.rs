use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::dto::response::RotateAccessCodesResponse,
    repositories::{AccessCodeRepository, QuizRepository},
};

static ACCESS_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("ACCESS_CODE_REGEX is a valid regex pattern")
});

/// Admin-only code administration. Both paths rotate: deactivate everything
/// for the targeted quizzes, then issue one new active code per quiz, inside
/// one transaction. The single-quiz path is the bulk path applied to one quiz.
pub struct AccessCodeAdminService {
    quizzes: Arc<dyn QuizRepository>,
    codes: Arc<dyn AccessCodeRepository>,
}

impl AccessCodeAdminService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, codes: Arc<dyn AccessCodeRepository>) -> Self {
        Self { quizzes, codes }
    }

    fn validate_code(raw_code: &str) -> AppResult<&str> {
        let code = raw_code.trim();
        if code.is_empty() {
            return Err(AppError::ValidationError(
                "Access code must not be empty".to_string(),
            ));
        }
        if !ACCESS_CODE_REGEX.is_match(code) {
            return Err(AppError::ValidationError(
                "Access code may only contain letters, numbers, hyphens and underscores"
                    .to_string(),
            ));
        }
        Ok(code)
    }

    /// Set or replace the active code for one quiz.
    pub async fn set_quiz_code(
        &self,
        quiz_id: &str,
        raw_code: &str,
        created_by: &str,
    ) -> AppResult<RotateAccessCodesResponse> {
        let code = Self::validate_code(raw_code)?;

        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        let rotation = self
            .codes
            .rotate_codes(std::slice::from_ref(&quiz.id), code, created_by)
            .await?;

        log::info!(
            "Admin {} set access code for quiz {} ({} prior codes deactivated)",
            created_by,
            quiz.id,
            rotation.deactivated
        );

        Ok(RotateAccessCodesResponse {
            quizzes_updated: rotation.issued,
            codes_deactivated: rotation.deactivated,
            message: format!("Access code updated for quiz '{}'", quiz.title),
        })
    }

    /// Replace the active code for every quiz in the catalog with one shared
    /// code string.
    pub async fn rotate_all_codes(
        &self,
        raw_code: &str,
        created_by: &str,
    ) -> AppResult<RotateAccessCodesResponse> {
        let code = Self::validate_code(raw_code)?;

        let quizzes = self.quizzes.list_quizzes(None).await?;
        let quiz_ids: Vec<String> = quizzes.into_iter().map(|quiz| quiz.id).collect();

        let rotation = self.codes.rotate_codes(&quiz_ids, code, created_by).await?;

        log::info!(
            "Admin {} rotated access codes for {} quizzes ({} prior codes deactivated)",
            created_by,
            rotation.issued,
            rotation.deactivated
        );

        Ok(RotateAccessCodesResponse {
            quizzes_updated: rotation.issued,
            codes_deactivated: rotation.deactivated,
            message: format!("Access codes rotated for {} quizzes", rotation.issued),
        })
    }
}
