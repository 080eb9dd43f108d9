//! Visit counter: read-or-create, then increment.

use crate::error::AppError;
use crate::models::Welcome;
use crate::response;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// POST /api/welcome
///
/// Reads the lowest-keyed row, creates it with Count = 1 when absent,
/// otherwise adds one. Read-then-write with no guard: concurrent calls can
/// lose an increment (last writer wins). The count is informational, so
/// this stays unguarded rather than paying for a transaction.
pub async fn increment_welcome(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let current: Option<Welcome> =
        sqlx::query_as(r#"SELECT "Id", "Count" FROM "Welcome" ORDER BY "Id" LIMIT 1"#)
            .fetch_optional(&state.pool)
            .await?;

    let welcome: Welcome = match current {
        None => {
            sqlx::query_as(
                r#"INSERT INTO "Welcome" ("Count") VALUES (1) RETURNING "Id", "Count""#,
            )
            .fetch_one(&state.pool)
            .await?
        }
        Some(row) => {
            sqlx::query_as(
                r#"UPDATE "Welcome" SET "Count" = $2 WHERE "Id" = $1 RETURNING "Id", "Count""#,
            )
            .bind(row.id)
            .bind(row.count + 1)
            .fetch_one(&state.pool)
            .await?
        }
    };

    Ok(response::ok(welcome))
}

#[cfg(test)]
mod tests {
    use crate::models::Welcome;

    #[test]
    fn welcome_serializes_pascal_case() {
        let w = Welcome { id: 1, count: 7 };
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["Id"], 1);
        assert_eq!(json["Count"], 7);
    }
}
