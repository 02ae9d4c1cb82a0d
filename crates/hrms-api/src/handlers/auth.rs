//! Auth handlers.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::request::LoginRequest;
use crate::dto::response::LoginResponse;
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let result = state
        .login_service
        .login(&req.email, &req.password, Utc::now())
        .await?;

    Ok(Json(result.into()))
}
