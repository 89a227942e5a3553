use serde::Serialize;

use crate::models::domain::{Profile, Quiz, QuizCategory, UserRole};

/// What a client must do with a quiz card: start it directly, or surface the
/// access gate first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizAction {
    Start,
    RequestAccess,
}

/// One catalog card. `locked` and `action` are derived per request from the
/// quiz's premium flag and the calling session's unlock state.
#[derive(Clone, Debug, Serialize)]
pub struct QuizCardDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: QuizCategory,
    pub premium: bool,
    pub locked: bool,
    pub action: QuizAction,
}

impl QuizCardDto {
    pub fn from_quiz(quiz: Quiz, unlocked: bool) -> Self {
        let locked = quiz.premium && !unlocked;
        QuizCardDto {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            category: quiz.category,
            premium: quiz.premium,
            locked,
            action: if locked {
                QuizAction::RequestAccess
            } else {
                QuizAction::Start
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StartQuizResponse {
    pub quiz_id: String,
    pub action: QuizAction,
}

#[derive(Debug, Serialize)]
pub struct VerifyAccessResponse {
    pub unlocked: bool,
    pub session_token: String,
    pub quiz_id: String,
    pub action: QuizAction,
}

#[derive(Debug, Serialize)]
pub struct RotateAccessCodesResponse {
    pub quizzes_updated: u64,
    pub codes_deactivated: u64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        ProfileDto {
            id: profile.id,
            display_name: profile.display_name,
            email: profile.email,
            role: profile.role,
        }
    }
}
