//! Staff listing, login, and the profile/staff join.

use crate::error::AppError;
use crate::models::{LoginRequest, ProfileView, Staff, StaffView};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

/// Left join on the shared id: profile attributes always present, staff
/// display attributes null when no staff row shares the id.
const PROFILE_WITH_STAFF_SQL: &str = r#"
    SELECT p."Id", p."Certification", p."Education", p."Experience", p."Description",
           s."Name" AS "StaffName", s."Email" AS "StaffEmail",
           s."Title" AS "StaffTitle", s."Photo" AS "StaffPhoto"
    FROM "Profile" p
    LEFT JOIN "Staff" s ON s."Id" = p."Id"
    WHERE p."Id" = $1
"#;

const STAFF_COLUMNS: &str =
    r#""Id", "Name", "Email", "Title", "Photo", "IsActive", "Password""#;

/// POST /api/login — exact, case-sensitive equality on both fields; no
/// hashing (plaintext storage is a documented gap, see DESIGN.md). A
/// mismatch is not an error: HTTP 200 with a 401 mirror and null data.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let staff: Option<StaffView> = sqlx::query_as(
        r#"SELECT "Id", "Name", "Email", "Title", "Photo", "IsActive"
           FROM "Staff" WHERE "Email" = $1 AND "Password" = $2"#,
    )
    .bind(&req.email)
    .bind(&req.password)
    .fetch_optional(&state.pool)
    .await?;

    let mirror = if staff.is_some() {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };
    Ok(response::ok_mirror(staff, mirror))
}

/// GET /api/staff — counselors only. Full records, password included,
/// exactly as the original listing behaved.
pub async fn list_counselors(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows: Vec<Staff> = sqlx::query_as(&format!(
        r#"SELECT {} FROM "Staff" WHERE "Title" = $1"#,
        STAFF_COLUMNS
    ))
    .bind("counselor")
    .fetch_all(&state.pool)
    .await?;
    Ok(response::ok(rows))
}

/// GET /api/allstaff
pub async fn list_all_staff(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows: Vec<Staff> =
        sqlx::query_as(&format!(r#"SELECT {} FROM "Staff""#, STAFF_COLUMNS))
            .fetch_all(&state.pool)
            .await?;
    Ok(response::ok(rows))
}

#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    pub id: Uuid,
}

/// GET /api/profile?id={uuid} — null data when no profile matches.
pub async fn get_profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileParams>,
) -> Result<impl IntoResponse, AppError> {
    let profile: Option<ProfileView> = sqlx::query_as(PROFILE_WITH_STAFF_SQL)
        .bind(params.id)
        .fetch_optional(&state.pool)
        .await?;
    Ok(response::ok(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_query_left_joins_staff_on_shared_id() {
        assert!(PROFILE_WITH_STAFF_SQL.contains("LEFT JOIN \"Staff\""));
        assert!(PROFILE_WITH_STAFF_SQL.contains(r#"s."Id" = p."Id""#));
        assert!(PROFILE_WITH_STAFF_SQL.contains(r#"WHERE p."Id" = $1"#));
    }

    #[test]
    fn profile_params_take_a_lowercase_id() {
        let params: ProfileParams =
            serde_json::from_str(r#"{"id":"00000000-0000-0000-0000-000000000000"}"#).unwrap();
        assert_eq!(params.id, Uuid::nil());
    }
}
