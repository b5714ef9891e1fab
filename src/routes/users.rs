use axum::extract::State;
use devconnect_user::RegisterInput;
use serde::Serialize;

use crate::error::Result;
use crate::extract::Json;
use crate::server::AppState;

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api/users - sign up and receive a token
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<TokenResponse>> {
    let id = state.user_command.register(input).await?;
    let token = state.tokens.issue(&id)?;

    Ok(Json(TokenResponse { token }))
}
