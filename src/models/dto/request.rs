use serde::Deserialize;
use validator::Validate;

use crate::models::domain::QuizCategory;

/// Body of a gate verification attempt. The code field is deliberately left
/// unconstrained here: the gate itself must reject empty/whitespace input with
/// its own validation error on every submit, before any storage call.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyAccessCodeRequest {
    #[validate(length(min = 1, max = 64))]
    pub quiz_id: String,

    pub code: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetAccessCodeRequest {
    #[validate(length(min = 4, max = 32))]
    pub code: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RotateAccessCodesRequest {
    #[validate(length(min = 4, max = 32))]
    pub code: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<QuizCategory>,
}
