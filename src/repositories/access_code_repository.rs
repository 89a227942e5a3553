use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use mongodb::{
    bson::doc, options::IndexOptions, Client, ClientSession, Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::AccessCode,
};

/// Outcome of a code rotation: how many prior codes were switched off and how
/// many new active codes were written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeRotation {
    pub deactivated: u64,
    pub issued: u64,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccessCodeRepository: Send + Sync {
    /// Active code row matching this quiz and this exact, case-sensitive code
    /// string. Inactive rows never match.
    async fn find_active_code(&self, quiz_id: &str, code: &str) -> AppResult<Option<AccessCode>>;

    async fn list_active_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<AccessCode>>;

    /// Deactivate every code for the given quizzes, then issue one new active
    /// code per quiz with the same code string. Both phases run inside one
    /// server-side transaction: either every listed quiz ends with exactly one
    /// active code, or nothing changed.
    async fn rotate_codes(
        &self,
        quiz_ids: &[String],
        code: &str,
        created_by: &str,
    ) -> AppResult<CodeRotation>;
}

pub struct MongoAccessCodeRepository {
    client: Client,
    collection: Collection<AccessCode>,
}

impl MongoAccessCodeRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("access_codes");
        Self {
            client: db.client().clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for access_codes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        // The gate's hot read: active codes for one quiz
        let lookup_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1, "active": 1 })
            .options(
                IndexOptions::builder()
                    .name("quiz_active_lookup".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(lookup_index).await?;

        log::info!("Successfully created indexes for access_codes collection");
        Ok(())
    }

    async fn rotate_in_session(
        &self,
        session: &mut ClientSession,
        quiz_ids: &[String],
        code: &str,
        created_by: &str,
    ) -> AppResult<CodeRotation> {
        let deactivate_result = self
            .collection
            .update_many(
                doc! { "quiz_id": { "$in": quiz_ids.to_vec() }, "active": true },
                doc! { "$set": { "active": false } },
            )
            .session(&mut *session)
            .await?;

        let new_codes: Vec<AccessCode> = quiz_ids
            .iter()
            .map(|quiz_id| AccessCode::issue(quiz_id, code, created_by))
            .collect();

        let insert_result = self
            .collection
            .insert_many(&new_codes)
            .session(&mut *session)
            .await?;

        Ok(CodeRotation {
            deactivated: deactivate_result.modified_count,
            issued: insert_result.inserted_ids.len() as u64,
        })
    }
}

#[async_trait]
impl AccessCodeRepository for MongoAccessCodeRepository {
    async fn find_active_code(&self, quiz_id: &str, code: &str) -> AppResult<Option<AccessCode>> {
        let matched = self
            .collection
            .find_one(doc! { "quiz_id": quiz_id, "code": code, "active": true })
            .await?;
        Ok(matched)
    }

    async fn list_active_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<AccessCode>> {
        use futures::TryStreamExt;

        let cursor = self
            .collection
            .find(doc! { "quiz_id": quiz_id, "active": true })
            .await?;
        let codes: Vec<AccessCode> = cursor.try_collect().await?;
        Ok(codes)
    }

    async fn rotate_codes(
        &self,
        quiz_ids: &[String],
        code: &str,
        created_by: &str,
    ) -> AppResult<CodeRotation> {
        if quiz_ids.is_empty() {
            // Mongo rejects empty insert batches
            return Ok(CodeRotation {
                deactivated: 0,
                issued: 0,
            });
        }

        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;

        let outcome = self
            .rotate_in_session(&mut session, quiz_ids, code, created_by)
            .await;

        match outcome {
            Ok(rotation) => {
                session.commit_transaction().await?;
                log::info!(
                    "Rotated access codes for {} quizzes ({} deactivated)",
                    rotation.issued,
                    rotation.deactivated
                );
                Ok(rotation)
            }
            Err(err) => {
                if let Err(abort_err) = session.abort_transaction().await {
                    log::warn!("Failed to abort code rotation transaction: {}", abort_err);
                }
                Err(err)
            }
        }
    }
}
