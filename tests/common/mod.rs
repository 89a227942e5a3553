#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use brightcode_server::{
    errors::AppResult,
    models::domain::{AccessCode, Profile, Quiz, QuizCategory},
    repositories::{AccessCodeRepository, CodeRotation, ProfileRepository, QuizRepository},
};

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, quiz: Quiz) {
        self.quizzes.write().await.insert(quiz.id.clone(), quiz);
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn list_quizzes(&self, category: Option<QuizCategory>) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes
            .values()
            .filter(|quiz| category.map(|c| quiz.category == c).unwrap_or(true))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(items)
    }
}

pub struct InMemoryAccessCodeRepository {
    codes: Arc<RwLock<Vec<AccessCode>>>,
}

impl InMemoryAccessCodeRepository {
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn insert(&self, code: AccessCode) {
        self.codes.write().await.push(code);
    }

    pub async fn all(&self) -> Vec<AccessCode> {
        self.codes.read().await.clone()
    }
}

#[async_trait]
impl AccessCodeRepository for InMemoryAccessCodeRepository {
    async fn find_active_code(&self, quiz_id: &str, code: &str) -> AppResult<Option<AccessCode>> {
        let codes = self.codes.read().await;
        Ok(codes
            .iter()
            .find(|row| row.quiz_id == quiz_id && row.active && row.code == code)
            .cloned())
    }

    async fn list_active_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<AccessCode>> {
        let codes = self.codes.read().await;
        Ok(codes
            .iter()
            .filter(|row| row.quiz_id == quiz_id && row.active)
            .cloned()
            .collect())
    }

    async fn rotate_codes(
        &self,
        quiz_ids: &[String],
        code: &str,
        created_by: &str,
    ) -> AppResult<CodeRotation> {
        if quiz_ids.is_empty() {
            return Ok(CodeRotation {
                deactivated: 0,
                issued: 0,
            });
        }

        // Single write lock stands in for the transactional rotation
        let mut codes = self.codes.write().await;

        let mut deactivated = 0;
        for row in codes.iter_mut() {
            if row.active && quiz_ids.contains(&row.quiz_id) {
                row.active = false;
                deactivated += 1;
            }
        }

        for quiz_id in quiz_ids {
            codes.push(AccessCode::issue(quiz_id, code, created_by));
        }

        Ok(CodeRotation {
            deactivated,
            issued: quiz_ids.len() as u64,
        })
    }
}

pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, profile: Profile) {
        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Profile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(id).cloned())
    }
}

pub fn make_quiz(id: &str, title: &str, category: QuizCategory, premium: bool) -> Quiz {
    let mut quiz = Quiz::new(title, "A quiz for young coders", category, premium);
    quiz.id = id.to_string();
    quiz
}
