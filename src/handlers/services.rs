//! Service reads: plain listing and the service/topic pairing view.

use crate::error::AppError;
use crate::models::{Service, ServiceTopicView};
use crate::response;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// Inner-join chain: only services with at least one linked topic appear,
/// one row per (service, topic) pairing.
const SERVICE_TOPIC_SQL: &str = r#"
    SELECT s."Name" AS "ServiceName", s."Label" AS "ServiceLabel",
           s."Target", s."Type",
           t."Name" AS "TopicName", t."Label" AS "TopicLabel",
           t."Description" AS "TopicDescription"
    FROM "Service" s
    JOIN "ServiceTopic" st ON st."ServiceName" = s."Name"
    JOIN "Topic" t ON t."Name" = st."TopicName"
"#;

/// GET /api/service
pub async fn list_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows: Vec<Service> = sqlx::query_as(r#"SELECT "Name", "Label", "Target", "Type" FROM "Service""#)
        .fetch_all(&state.pool)
        .await?;
    Ok(response::ok(rows))
}

/// GET /api/serviceTopic — the one listing whose envelope carries a count.
pub async fn list_service_topics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows: Vec<ServiceTopicView> = sqlx::query_as(SERVICE_TOPIC_SQL)
        .fetch_all(&state.pool)
        .await?;
    Ok(response::ok_counted(rows))
}
