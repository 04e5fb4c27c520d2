use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;

const NO_FILE_MESSAGE: &str = "No file uploaded";
const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze resume";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Callers only ever see one of two bodies; the cause is written to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NoFile => (StatusCode::BAD_REQUEST, NO_FILE_MESSAGE),
            AppError::Upload(msg) => {
                tracing::error!("Upload error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED_MESSAGE)
            }
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED_MESSAGE)
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED_MESSAGE)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED_MESSAGE)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_no_file_maps_to_400() {
        let response = AppError::NoFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "No file uploaded"}));
    }

    #[tokio::test]
    async fn test_upstream_failure_hides_detail() {
        let err = AppError::Llm(LlmError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "Failed to analyze resume"}));
        assert!(!body.to_string().contains("API key"));
    }

    #[tokio::test]
    async fn test_extraction_and_internal_failures_share_body() {
        for err in [
            AppError::Extraction(ExtractError::Empty),
            AppError::Internal(anyhow::anyhow!("worker panicked")),
            AppError::Upload("stream closed".to_string()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                body_json(response).await,
                json!({"error": "Failed to analyze resume"})
            );
        }
    }
}
