use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<covmap::CovmapError> for AppError {
    fn from(e: covmap::CovmapError) -> Self {
        match &e {
            covmap::CovmapError::InvalidArgument(msg) => AppError::bad_request(msg.clone()),
            covmap::CovmapError::NotFound(msg) => AppError::not_found(msg.clone()),
            _ => AppError::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covmap::CovmapError;

    #[test]
    fn library_errors_map_to_statuses() {
        let missing = AppError::from(CovmapError::NotFound("/countries/Atlantis".into()));
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.message, "/countries/Atlantis");

        let bad = AppError::from(CovmapError::InvalidArgument("empty region code".into()));
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);

        let broken = AppError::from(CovmapError::InvalidInput("boom".into()));
        assert_eq!(broken.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_renders_as_404() {
        let response = AppError::not_found("Region not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
