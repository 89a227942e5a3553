use actix_web::{post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{RotateAccessCodesRequest, SetAccessCodeRequest},
};

// Registered under the authenticated /api/admin scope.

#[put("/quizzes/{id}/access-code")]
pub async fn set_quiz_access_code(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SetAccessCodeRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let body = request.into_inner();
    body.validate()?;

    let response = state
        .access_admin_service
        .set_quiz_code(&id, &body.code, &auth.0.sub)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/access-codes/rotate")]
pub async fn rotate_access_codes(
    state: web::Data<AppState>,
    request: web::Json<RotateAccessCodesRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let body = request.into_inner();
    body.validate()?;

    let response = state
        .access_admin_service
        .rotate_all_codes(&body.code, &auth.0.sub)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
