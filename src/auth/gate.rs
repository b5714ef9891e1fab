use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::server::AppState;

/// Header carrying the token on private routes.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Identity attached to a request that passed [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: String,
}

/// Rejects the request unless it carries a valid token whose subject still
/// exists, then inserts [`AuthUser`] into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
    else {
        tracing::debug!("missing auth token");
        return AppError::NoToken.into_response();
    };

    let id = match state.tokens.verify(token) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "rejected auth token");
            return AppError::InvalidToken.into_response();
        }
    };

    // Accounts can be deleted while their tokens are still unexpired.
    match state.user_command.exists(id.to_owned()).await {
        Ok(true) => {
            req.extensions_mut().insert(AuthUser { id });
            next.run(req).await
        }
        Ok(false) => {
            tracing::warn!(user_id = %id, "token subject no longer exists");
            AppError::InvalidToken.into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AppError::NoToken)
    }
}
