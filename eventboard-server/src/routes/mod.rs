pub mod events;
pub mod meta;

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eventboard_core::EventBoardError;
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON request body whose rejections answer with an [`ErrorResponse`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Convert eventboard errors and body rejections to HTTP responses
pub enum AppError {
    Event(EventBoardError),
    Body(JsonRejection),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Event(EventBoardError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Event(EventBoardError::Validation(_) | EventBoardError::DateTime(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Event(EventBoardError::Remote(_) | EventBoardError::Decode(_)) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Event(EventBoardError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Body(rejection) => rejection.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Event(err) => err.to_string(),
            AppError::Body(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.message();
        if status.is_server_error() {
            tracing::warn!(%status, %error, "request failed");
        }

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<EventBoardError> for AppError {
    fn from(err: EventBoardError) -> Self {
        AppError::Event(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Body(rejection)
    }
}
