use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::response::ProfileDto,
    repositories::ProfileRepository,
};

pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn get_profile(&self, account_id: &str) -> AppResult<ProfileDto> {
        let profile = self
            .profiles
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Profile with id '{}' not found", account_id))
            })?;

        Ok(profile.into())
    }
}
