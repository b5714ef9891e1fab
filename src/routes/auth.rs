use axum::extract::State;
use devconnect_user::{LoginInput, User};

use super::users::TokenResponse;
use crate::auth::AuthUser;
use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::server::AppState;

/// GET /api/auth - the authenticated account
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> Result<Json<User>> {
    match state.user_command.find(auth.id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::InvalidToken),
    }
}

/// POST /api/auth - log in and receive a token
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<TokenResponse>> {
    let id = state.user_command.login(input).await?;
    let token = state.tokens.issue(&id)?;

    tracing::info!(user_id = %id, "user logged in");

    Ok(Json(TokenResponse { token }))
}
