use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::VerifyAccessCodeRequest,
    models::dto::response::{QuizAction, VerifyAccessResponse},
    session::{session_token, SessionStore},
};

/// The access gate. A match unlocks the whole session (every premium quiz),
/// not just the requested quiz; the response tells the client to go ahead and
/// start the quiz it originally asked for.
#[post("/api/access/verify")]
pub async fn verify_access(
    state: web::Data<AppState>,
    request: web::Json<VerifyAccessCodeRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let body = request.into_inner();
    body.validate()?;

    state
        .access_gate_service
        .verify_code(&body.quiz_id, &body.code)
        .await?;

    let token = session_token(&req).unwrap_or_else(SessionStore::issue_token);
    state.sessions.mark_unlocked(&token).await;

    Ok(HttpResponse::Ok().json(VerifyAccessResponse {
        unlocked: true,
        session_token: token,
        quiz_id: body.quiz_id,
        action: QuizAction::Start,
    }))
}
