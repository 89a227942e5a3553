use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizCategory,
    models::dto::response::{QuizAction, QuizCardDto, StartQuizResponse},
    repositories::QuizRepository,
};

/// Catalog presenter: pure read over the quiz list plus the calling session's
/// unlock flag. Decides per quiz whether the client starts it directly or must
/// surface the access gate first. No writes originate here.
pub struct CatalogService {
    quizzes: Arc<dyn QuizRepository>,
}

impl CatalogService {
    pub fn new(quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { quizzes }
    }

    pub async fn list_cards(
        &self,
        category: Option<QuizCategory>,
        unlocked: bool,
    ) -> AppResult<Vec<QuizCardDto>> {
        let quizzes = self.quizzes.list_quizzes(category).await?;

        Ok(quizzes
            .into_iter()
            .map(|quiz| QuizCardDto::from_quiz(quiz, unlocked))
            .collect())
    }

    pub async fn resolve_start(&self, quiz_id: &str, unlocked: bool) -> AppResult<StartQuizResponse> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        let action = if quiz.premium && !unlocked {
            QuizAction::RequestAccess
        } else {
            QuizAction::Start
        };

        Ok(StartQuizResponse {
            quiz_id: quiz.id,
            action,
        })
    }
}
