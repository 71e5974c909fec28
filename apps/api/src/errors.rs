use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::preview::PreviewError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PreviewError> for AppError {
    fn from(err: PreviewError) -> Self {
        match err {
            PreviewError::Form(_) | PreviewError::Selection(_) => {
                AppError::Validation(err.to_string())
            }
            PreviewError::Photo(_) => AppError::UnprocessableEntity(err.to_string()),
            PreviewError::UploadInProgress | PreviewError::Finalized | PreviewError::NotFinalized => {
                AppError::Conflict(err.to_string())
            }
            PreviewError::SessionClosed => AppError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormError;
    use crate::photo::PhotoError;
    use crate::selection::SelectionError;

    fn status_of(err: PreviewError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn test_preview_errors_map_to_status_codes() {
        assert_eq!(
            status_of(PreviewError::Form(FormError::InvalidSkillLevel("101".into()))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(PreviewError::Selection(SelectionError::UnknownVariant("x".into()))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(PreviewError::Photo(PhotoError::Empty)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_of(PreviewError::UploadInProgress), StatusCode::CONFLICT);
        assert_eq!(status_of(PreviewError::Finalized), StatusCode::CONFLICT);
        assert_eq!(status_of(PreviewError::NotFinalized), StatusCode::CONFLICT);
        assert_eq!(status_of(PreviewError::SessionClosed), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_error_body_envelope() {
        let response = AppError::Conflict("busy".to_string()).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "CONFLICT");
        assert_eq!(json["error"]["message"], "busy");
    }
}
