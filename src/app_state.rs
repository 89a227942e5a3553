use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAccessCodeRepository, MongoProfileRepository, MongoQuizRepository},
    services::{
        access_admin_service::AccessCodeAdminService, access_gate_service::AccessGateService,
        catalog_service::CatalogService, profile_service::ProfileService,
    },
    session::SessionStore,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub access_gate_service: Arc<AccessGateService>,
    pub access_admin_service: Arc<AccessCodeAdminService>,
    pub profile_service: Arc<ProfileService>,
    pub sessions: SessionStore,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let access_code_repository = Arc::new(MongoAccessCodeRepository::new(&db));
        access_code_repository.ensure_indexes().await?;

        let profile_repository = Arc::new(MongoProfileRepository::new(&db));
        profile_repository.ensure_indexes().await?;

        let catalog_service = Arc::new(CatalogService::new(quiz_repository.clone()));
        let access_gate_service = Arc::new(AccessGateService::new(access_code_repository.clone()));
        let access_admin_service = Arc::new(AccessCodeAdminService::new(
            quiz_repository,
            access_code_repository,
        ));
        let profile_service = Arc::new(ProfileService::new(profile_repository));

        Ok(Self {
            catalog_service,
            access_gate_service,
            access_admin_service,
            profile_service,
            sessions: SessionStore::new(),
            db,
            config: Arc::new(config),
        })
    }
}
