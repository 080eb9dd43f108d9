//! Typed errors and HTTP mapping.
//!
//! Every error body carries the original API's envelope: a null `data`
//! field, a human-readable `message`, and the integer `httpStatus` mirror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Raw error text in the body: internal-tool posture, see DESIGN.md.
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({
            "data": null,
            "message": self.to_string(),
            "httpStatus": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn bad_request_is_400_with_mirror() {
        let resp =
            AppError::BadRequest("Topic with this name already exists".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["httpStatus"], 400);
        assert!(body["data"].is_null());
        assert_eq!(body["message"], "Topic with this name already exists");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let resp = AppError::NotFound("Topic not found".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn db_error_is_500() {
        let resp = AppError::Db(sqlx::Error::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["httpStatus"], 500);
    }
}
