use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, auth::AuthenticatedUser, errors::AppError};

/// Role lookup for the signed-in account; registered at the root of the
/// authenticated /api/me scope. Clients use the role purely to decide which
/// controls to show.
#[get("")]
pub async fn me(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.profile_service.get_profile(&auth.0.sub).await?;
    Ok(HttpResponse::Ok().json(profile))
}
