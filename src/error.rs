use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures the puzzle generators report to the caller. Unplaceable words
/// are not errors; they come back as diagnostics on the layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The word list is empty after normalization.
    #[error("no valid words: enter at least one word made of letters")]
    NoValidWords,
}

/// API-level errors mapped to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("too many words: the maximum is {0}")]
    TooManyWords(usize),

    #[error("resource not found")]
    NotFound,

    /// Anything unexpected during assembly or persistence. The detail is
    /// logged; the client only sees a generic message.
    #[error("could not generate puzzle")]
    Internal(#[source] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Generate(_) | ApiError::TooManyWords(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(err) => {
                tracing::error!("request failed: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_error_message_is_user_facing() {
        let message = GenerateError::NoValidWords.to_string();
        assert!(message.contains("no valid words"));
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = ApiError::Internal(anyhow::anyhow!("connection reset by peer"));
        assert_eq!(err.to_string(), "could not generate puzzle");
    }
}
