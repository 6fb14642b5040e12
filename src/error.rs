use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
///
/// Empty-signal conditions (no interactions, no positive-score candidates)
/// are not errors; the engine resolves those through its fallback paths.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Explanation provider error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ExternalApi(_) | AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound("user".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidInput("top_n".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ExternalApi("timeout".to_string()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Internal("oops".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_passes_message_through() {
        let err = AppError::NotFound("User with ID 42 not found".to_string());
        assert_eq!(err.to_string(), "User with ID 42 not found");
    }
}
