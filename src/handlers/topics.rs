//! Topic listing and mutations.
//!
//! Topic existence is a two-state model keyed by the immutable natural key
//! `Name`: create moves absent -> present (conflict when already present),
//! delete moves present -> absent (404 when absent), update stays
//! present -> present and only ever touches label and description.

use crate::error::AppError;
use crate::models::{DeleteTopicRequest, Topic};
use crate::response;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

const SELECT_BY_NAME: &str = r#"SELECT "Name", "Label", "Description" FROM "Topic" WHERE "Name" = $1"#;

const UPDATE_BY_NAME: &str = r#"UPDATE "Topic" SET "Label" = $2, "Description" = $3 WHERE "Name" = $1
   RETURNING "Name", "Label", "Description""#;

async fn find_topic(state: &AppState, name: &str) -> Result<Option<Topic>, AppError> {
    let topic = sqlx::query_as(SELECT_BY_NAME)
        .bind(name)
        .fetch_optional(&state.pool)
        .await?;
    Ok(topic)
}

/// GET /api/topics
pub async fn list_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows: Vec<Topic> = sqlx::query_as(r#"SELECT "Name", "Label", "Description" FROM "Topic""#)
        .fetch_all(&state.pool)
        .await?;
    Ok(response::ok(rows))
}

/// POST /api/addTopics
pub async fn add_topic(
    State(state): State<AppState>,
    Json(topic): Json<Topic>,
) -> Result<impl IntoResponse, AppError> {
    if find_topic(&state, &topic.name).await?.is_some() {
        return Err(AppError::BadRequest(
            "Topic with this name already exists".into(),
        ));
    }
    let created: Topic = sqlx::query_as(
        r#"INSERT INTO "Topic" ("Name", "Label", "Description") VALUES ($1, $2, $3)
           RETURNING "Name", "Label", "Description""#,
    )
    .bind(&topic.name)
    .bind(&topic.label)
    .bind(&topic.description)
    .fetch_one(&state.pool)
    .await?;
    Ok(response::with_message(
        StatusCode::CREATED,
        created,
        "Topic created successfully",
    ))
}

/// DELETE /api/removeTopics
pub async fn remove_topic(
    State(state): State<AppState>,
    Json(req): Json<DeleteTopicRequest>,
) -> Result<impl IntoResponse, AppError> {
    let existing = find_topic(&state, &req.name)
        .await?
        .ok_or_else(|| AppError::NotFound("Topic not found".into()))?;
    sqlx::query(r#"DELETE FROM "Topic" WHERE "Name" = $1"#)
        .bind(&existing.name)
        .execute(&state.pool)
        .await?;
    Ok(response::with_message(
        StatusCode::OK,
        existing,
        "Topic deleted successfully",
    ))
}

/// PUT /api/updateTopics — the name is immutable; only label and
/// description are overwritten.
pub async fn update_topic(
    State(state): State<AppState>,
    Json(topic): Json<Topic>,
) -> Result<impl IntoResponse, AppError> {
    if find_topic(&state, &topic.name).await?.is_none() {
        return Err(AppError::NotFound("Topic not found".into()));
    }
    let updated: Topic = sqlx::query_as(UPDATE_BY_NAME)
        .bind(&topic.name)
        .bind(&topic.label)
        .bind(&topic.description)
        .fetch_one(&state.pool)
        .await?;
    Ok(response::with_message(
        StatusCode::OK,
        updated,
        "Topic updated successfully",
    ))
}
