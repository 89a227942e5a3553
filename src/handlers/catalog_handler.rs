use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::CatalogQuery,
    session::session_token,
};

/// Public catalog. Lock state is computed from the caller's session token, so
/// anonymous visitors simply see every premium quiz locked.
#[get("/api/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    query: web::Query<CatalogQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let unlocked = match session_token(&req) {
        Some(token) => state.sessions.is_unlocked(&token).await,
        None => false,
    };

    let cards = state
        .catalog_service
        .list_cards(query.into_inner().category, unlocked)
        .await?;
    Ok(HttpResponse::Ok().json(cards))
}

#[post("/api/quizzes/{id}/start")]
pub async fn start_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let unlocked = match session_token(&req) {
        Some(token) => state.sessions.is_unlocked(&token).await,
        None => false,
    };

    let decision = state.catalog_service.resolve_start(&id, unlocked).await?;
    Ok(HttpResponse::Ok().json(decision))
}
