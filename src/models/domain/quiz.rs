use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quiz as listed in the public catalog. Immutable from the gating flow's
/// perspective; premium quizzes require an active access code before starting.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: QuizCategory,
    pub premium: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizCategory {
    Scratch,
    Python,
    Web,
    Logic,
}

impl QuizCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizCategory::Scratch => "scratch",
            QuizCategory::Python => "python",
            QuizCategory::Web => "web",
            QuizCategory::Logic => "logic",
        }
    }
}

impl Quiz {
    pub fn new(title: &str, description: &str, category: QuizCategory, premium: bool) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            premium,
            created_at: Some(Utc::now()),
        }
    }
}
