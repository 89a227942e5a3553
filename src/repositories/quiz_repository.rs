use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{Quiz, QuizCategory},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list_quizzes(&self, category: Option<QuizCategory>) -> AppResult<Vec<Quiz>>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list_quizzes(&self, category: Option<QuizCategory>) -> AppResult<Vec<Quiz>> {
        use futures::TryStreamExt;

        let filter = match category {
            Some(category) => doc! { "category": category.as_str() },
            None => doc! {},
        };

        let find_options = FindOptions::builder().sort(doc! { "title": 1 }).build();

        let cursor = self
            .collection
            .find(filter)
            .with_options(find_options)
            .await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;

        Ok(quizzes)
    }
}
