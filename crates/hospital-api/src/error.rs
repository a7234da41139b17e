//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use hospital_core::DbError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail),
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", detail)
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use hospital_core::db::SqliteError;
    use hospital_core::EntityKind;

    #[tokio::test]
    async fn not_found_returns_404() {
        let response = ApiError::NotFound("patient 3 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "patient 3 not found");
    }

    #[tokio::test]
    async fn internal_returns_500_with_message() {
        let response = ApiError::Internal("disk I/O error".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INTERNAL");
        assert_eq!(json["error"]["message"], "disk I/O error");
    }

    #[test]
    fn missing_reference_maps_to_not_found() {
        let err: ApiError = DbError::NotFound {
            kind: EntityKind::Specialist,
            id: 2,
        }
        .into();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "specialist 2 not found"));
    }

    #[test]
    fn empty_scope_maps_to_not_found() {
        let err: ApiError = DbError::EmptyScope {
            kind: EntityKind::Diagnosis,
            scope: EntityKind::Patient,
            id: 5,
        }
        .into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn sqlite_error_maps_to_internal() {
        let err: ApiError = DbError::Sqlite(SqliteError::InvalidQuery).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
