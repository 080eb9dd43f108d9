//! News read model: News left-joined to Service.

use crate::error::AppError;
use crate::models::NewsView;
use crate::response;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// Every News row appears regardless of whether its ServiceName matches a
/// Service; the label is null on no match. CreateTime is text and sorts
/// lexicographically, matching the original ordering.
const NEWS_WITH_SERVICE_SQL: &str = r#"
    SELECT n."Id", n."Title", n."Content", n."Notice", n."Link",
           n."CreateTime", n."UpdateTime", n."TitleName", n."ServiceName",
           n."Status", n."Img", s."Label" AS "ServiceLabel"
    FROM "News" n
    LEFT JOIN "Service" s ON n."ServiceName" = s."Name"
    ORDER BY n."CreateTime" DESC
"#;

/// GET /api/news
pub async fn list_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows: Vec<NewsView> = sqlx::query_as(NEWS_WITH_SERVICE_SQL)
        .fetch_all(&state.pool)
        .await?;
    Ok(response::ok(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_query_left_joins_and_orders_descending() {
        assert!(NEWS_WITH_SERVICE_SQL.contains("LEFT JOIN \"Service\""));
        assert!(NEWS_WITH_SERVICE_SQL.contains("ORDER BY n.\"CreateTime\" DESC"));
        assert!(NEWS_WITH_SERVICE_SQL.contains("AS \"ServiceLabel\""));
    }
}
