pub mod access_code;
pub mod profile;
pub mod quiz;

pub use access_code::AccessCode;
pub use profile::{Profile, UserRole};
pub use quiz::{Quiz, QuizCategory};
