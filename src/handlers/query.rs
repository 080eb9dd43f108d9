//! Raw SQL execution and the dynamic `Test` read.
//!
//! Both endpoints return rows through the materializer because their result
//! shapes are not known at compile time. `/api/general/query` is an
//! intentional admin/debug capability with no statement allow-list and no
//! injection defense; see DESIGN.md for the security posture.

use crate::sql::{run_raw_query, row_to_json, RawQueryError};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct RawQueryRequest {
    pub sql: String,
}

/// POST /api/general/query
///
/// This handler is self-contained: every outcome, including failure, is
/// mapped to a response here rather than crossing the handler boundary.
pub async fn general_query(
    State(state): State<AppState>,
    Json(req): Json<RawQueryRequest>,
) -> impl IntoResponse {
    // Reject blank input before any connection work happens.
    if req.sql.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "sql must not be empty", "httpStatus": 400 })),
        );
    }

    match run_raw_query(&state.database_url, &req.sql).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(json!({ "data": rows, "httpStatus": 200 })),
        ),
        Err(RawQueryError::Query { message, position }) => {
            tracing::debug!(error = %message, "raw query rejected by engine");
            let mut body = json!({ "error": message, "httpStatus": 400 });
            if let Some(p) = position {
                body["errorPosition"] = json!(p);
            }
            (StatusCode::BAD_REQUEST, Json(body))
        }
        Err(RawQueryError::Connection(message)) => {
            tracing::error!(error = %message, "raw query connection failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message, "httpStatus": 500 })),
            )
        }
    }
}

/// GET /api/test — `"Test"."Test"` has arbitrary columns, so rows are
/// materialized dynamically instead of decoding into a struct.
pub async fn list_test(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, crate::error::AppError> {
    let rows = sqlx::query(r#"SELECT * FROM "Test"."Test""#)
        .fetch_all(&state.pool)
        .await?;
    let data: Vec<_> = rows.iter().map(row_to_json).collect();
    Ok(crate::response::ok(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use sqlx::postgres::PgPoolOptions;

    fn state_with_unreachable_db() -> AppState {
        AppState {
            // connect_lazy performs no I/O; any touch of the pool or the
            // URL in these tests would fail loudly instead.
            pool: PgPoolOptions::new()
                .connect_lazy("postgres://unreachable.invalid/none")
                .expect("lazy pool"),
            database_url: "not-a-database-url".into(),
        }
    }

    #[test]
    fn request_body_uses_lowercase_sql_key() {
        let req: RawQueryRequest = serde_json::from_str(r#"{"sql":"SELECT 1"}"#).unwrap();
        assert_eq!(req.sql, "SELECT 1");
    }

    #[tokio::test]
    async fn blank_sql_is_rejected_before_connecting() {
        for sql in ["", "   ", "\n\t "] {
            let resp = general_query(
                State(state_with_unreachable_db()),
                Json(RawQueryRequest { sql: sql.into() }),
            )
            .await
            .into_response();
            // 400 (not the 500 an attempted connection would produce)
            // proves the short-circuit happened first.
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["httpStatus"], 400);
            assert!(body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn connection_failure_is_500_with_error_text() {
        let resp = general_query(
            State(state_with_unreachable_db()),
            Json(RawQueryRequest {
                sql: "SELECT 1".into(),
            }),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["httpStatus"], 500);
        assert!(body["error"].is_string());
    }
}
