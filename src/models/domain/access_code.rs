use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An access code scoped to one quiz. Codes are matched case-sensitively and
/// only while `active` is true; deactivated codes are kept for history and
/// never match again. There is no expiry of any kind.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccessCode {
    pub id: String,
    pub quiz_id: String,
    pub code: String,
    pub active: bool,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AccessCode {
    /// New active code for a quiz, recording the issuing admin.
    pub fn issue(quiz_id: &str, code: &str, created_by: &str) -> Self {
        AccessCode {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            code: code.to_string(),
            active: true,
            created_by: created_by.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}
