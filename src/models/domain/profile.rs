use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account profile record keyed by the authenticated identity. The role is
/// read once per request path that needs it; it is never mutated here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Parent,
    #[default]
    None,
}

impl Profile {
    pub fn new(id: &str, display_name: &str, email: &str, role: UserRole) -> Self {
        Profile {
            id: id.to_string(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            role,
            created_at: Some(Utc::now()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
