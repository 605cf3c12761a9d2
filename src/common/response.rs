use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub code: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: &str, code: StatusCode) -> Self {
        Self {
            status: "error".to_string(),
            code: code.as_u16(),
            message: message.to_string(),
        }
    }
}

/// Error reply shared by every handler.
///
/// The message is sent to the client; the cause is only logged.
#[derive(Debug)]
pub struct ApiError(pub String, pub StatusCode, pub Option<String>);

impl ApiError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self(message.into(), status, None)
    }

    pub fn with_cause(mut self, cause: impl ToString) -> Self {
        self.2 = Some(cause.to_string());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, status, cause) = (self.0, self.1, self.2);
        let cause = cause.as_deref().unwrap_or("-");

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), cause, "{}", message);
        } else {
            tracing::warn!(status = status.as_u16(), cause, "{}", message);
        }

        (status, Json(ErrorResponse::new(&message, status))).into_response()
    }
}
