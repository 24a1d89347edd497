use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scoring_application::CommandError;
use serde_json::json;

#[derive(Debug)]
pub enum HttpError {
    Validation { message: String },
    PayloadTooLarge { message: String },
    Internal { message: String },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Validation { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            HttpError::PayloadTooLarge { message } => (StatusCode::PAYLOAD_TOO_LARGE, message),
            HttpError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

pub fn error_mapper(error: CommandError) -> HttpError {
    match error {
        CommandError::Validation { .. } => HttpError::Validation {
            message: error.to_string(),
        },
        CommandError::Infrastructure { .. } => HttpError::Internal {
            message: error.to_string(),
        },
    }
}
