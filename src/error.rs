use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// One entry of the `{ errors: [...] }` envelope every failure is reported with.
#[derive(Debug, Serialize)]
pub struct ErrorItem {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl ErrorItem {
    fn msg(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorItem>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] devconnect_shared::Error),

    #[error("No token, authorization denied")]
    NoToken,

    #[error("Token is invalid")]
    InvalidToken,

    #[error("{0}")]
    Json(#[from] JsonRejection),

    #[error("Server error")]
    Server(#[from] anyhow::Error),
}

fn validation_items(errors: &validator::ValidationErrors) -> Vec<ErrorItem> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| ErrorItem {
                msg: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
                param: Some(field.to_string()),
            })
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use devconnect_shared::Error;

        let (status, errors) = match self {
            AppError::Domain(Error::Validate(errors)) => {
                (StatusCode::BAD_REQUEST, validation_items(&errors))
            }
            AppError::Domain(Error::NotFound(msg)) | AppError::Domain(Error::Rejected(msg)) => {
                (StatusCode::BAD_REQUEST, vec![ErrorItem::msg(msg)])
            }
            AppError::Domain(Error::NotOwner) => (
                StatusCode::UNAUTHORIZED,
                vec![ErrorItem::msg("Unauthorized operation")],
            ),
            AppError::Domain(Error::Unknown(e)) => {
                tracing::error!(error = ?e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, vec![ErrorItem::msg("Server error")])
            }
            AppError::NoToken => (
                StatusCode::UNAUTHORIZED,
                vec![ErrorItem::msg("No token, authorization denied")],
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                vec![ErrorItem::msg("Token is invalid")],
            ),
            AppError::Json(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                (StatusCode::BAD_REQUEST, vec![ErrorItem::msg(rejection.body_text())])
            }
            AppError::Server(e) => {
                tracing::error!(error = ?e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, vec![ErrorItem::msg("Server error")])
            }
        };

        (status, Json(ErrorBody { errors })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
