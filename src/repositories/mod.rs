pub mod access_code_repository;
pub mod profile_repository;
pub mod quiz_repository;

pub use access_code_repository::{AccessCodeRepository, CodeRotation, MongoAccessCodeRepository};
pub use profile_repository::{MongoProfileRepository, ProfileRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
