use agrilink_types::AgriLinkError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] AgriLinkError),

    /// Request body missing, malformed, or not JSON
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => match err {
                AgriLinkError::InvalidQuantity(_) | AgriLinkError::InvalidTransportRate(_) => {
                    StatusCode::BAD_REQUEST
                }
                AgriLinkError::UnknownOriginCity(_) | AgriLinkError::UnknownCommodity(_) => {
                    StatusCode::NOT_FOUND
                }
                AgriLinkError::MissingPrice { .. } | AgriLinkError::MissingDistance { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                AgriLinkError::InvalidReferenceData(_)
                | AgriLinkError::SerializationError(_)
                | AgriLinkError::IoError(_)
                | AgriLinkError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Domain(err) => err.kind(),
            ApiError::InvalidBody(_) => "invalid_body",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (
            status,
            Json(serde_json::json!({
                "error": self.kind(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
