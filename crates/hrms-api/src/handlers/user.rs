//! Handlers for the authenticated identity.

use axum::Json;

use crate::dto::response::MeResponse;
use crate::extractors::AuthUser;

/// GET /me
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse::from(auth.context()))
}
