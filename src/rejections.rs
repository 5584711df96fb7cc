use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error taxonomy shared by the core operations and the transport layer.
///
/// `NotFound` covers both missing sessions and ownership mismatches, so the
/// response never reveals whether another user's session exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppError {
    Validation(&'static str),
    EmptySelection,
    AlreadyCompleted,
    AlreadyAnswered,
    NotCompleted,
    NotFound,
    Unauthorized,
    Internal(&'static str),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::EmptySelection => write!(f, "no options selected"),
            AppError::AlreadyCompleted => write!(f, "session is already completed"),
            AppError::AlreadyAnswered => write!(f, "question already answered"),
            AppError::NotCompleted => write!(f, "session is not completed"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, error, detail) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", Some(msg)),
            AppError::EmptySelection => (StatusCode::BAD_REQUEST, "empty_selection", None),
            AppError::AlreadyCompleted => (StatusCode::CONFLICT, "already_completed", None),
            AppError::AlreadyAnswered => (StatusCode::CONFLICT, "already_answered", None),
            AppError::NotCompleted => (StatusCode::CONFLICT, "not_completed", None),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", None),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            // Internal details go to the log, not the client.
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None),
        };

        (code, Json(ErrorBody { error, detail })).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the underlying error and collapse it to `AppError::Internal`.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;

    /// Log the underlying error and report it as a validation failure.
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{msg}: {e}");
            AppError::Validation(msg)
        })
    }
}
