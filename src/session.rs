use std::collections::HashSet;
use std::sync::Arc;

use actix_web::HttpRequest;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

/// In-memory registry of viewer sessions that have unlocked premium content.
///
/// The unlock is a per-session convenience flag: one successful code
/// verification unlocks every premium quiz for that session. Nothing is
/// persisted; a restart clears all unlocks, mirroring the per-visit lifetime
/// of the flag. There is no per-user or per-quiz memory.
#[derive(Clone, Default)]
pub struct SessionStore {
    unlocked: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opaque token handed to the client on first unlock.
    pub fn issue_token() -> String {
        Uuid::new_v4().to_string()
    }

    pub async fn is_unlocked(&self, token: &str) -> bool {
        self.unlocked.read().await.contains(token)
    }

    pub async fn mark_unlocked(&self, token: &str) {
        self.unlocked.write().await.insert(token.to_string());
    }
}

/// Session token from the request headers, if the client sent one. An absent
/// or malformed header simply reads as "no session", never an error.
pub fn session_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
