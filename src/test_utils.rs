use crate::models::domain::{AccessCode, Profile, Quiz, QuizCategory, UserRole};


#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_quizzes() {
        let quizzes = sample_quizzes();
        assert_eq!(quizzes.len(), 2);
        assert!(!quizzes[0].premium);
        assert!(quizzes[1].premium);
    }

    #[test]
    fn test_fixtures_active_code() {
        let code = active_code("quiz-1", "SPRING24");
        assert_eq!(code.quiz_id, "quiz-1");
        assert!(code.active);
    }

    #[test]
    fn test_fixtures_profiles() {
        assert!(admin_profile().is_admin());
        assert!(!parent_profile().is_admin());
    }
}
