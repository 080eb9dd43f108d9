//! Database bootstrap: create the database and the owned tables if absent.
//!
//! The site's tables use quoted PascalCase identifiers (a legacy of the
//! original schema). `"Test"."Test"` is externally managed with an unknown
//! shape and is deliberately not created here.

use crate::error::AppError;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// DDL for every table this service owns. Idempotent; foreign keys are
/// intentionally absent: News.ServiceName and Profile.Id may dangle and
/// reads tolerate that with left joins.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS "News" (
        "Id" UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        "Title" TEXT NOT NULL,
        "Content" TEXT NOT NULL,
        "Notice" TEXT NOT NULL,
        "Link" TEXT,
        "CreateTime" TEXT NOT NULL,
        "UpdateTime" TEXT,
        "TitleName" TEXT NOT NULL,
        "ServiceName" TEXT NOT NULL,
        "Status" TEXT NOT NULL,
        "Img" TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "Service" (
        "Name" TEXT PRIMARY KEY,
        "Label" TEXT NOT NULL,
        "Target" TEXT NOT NULL,
        "Type" TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "Staff" (
        "Id" UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        "Name" TEXT NOT NULL,
        "Email" TEXT NOT NULL,
        "Title" TEXT NOT NULL,
        "Photo" TEXT NOT NULL,
        "IsActive" BOOLEAN NOT NULL DEFAULT TRUE,
        "Password" TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "Topic" (
        "Name" TEXT PRIMARY KEY,
        "Label" TEXT NOT NULL,
        "Description" TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "Profile" (
        "Id" UUID PRIMARY KEY,
        "Certification" TEXT,
        "Education" TEXT,
        "Experience" TEXT NOT NULL,
        "Description" TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "ServiceTopic" (
        "ServiceName" TEXT NOT NULL,
        "TopicName" TEXT NOT NULL,
        PRIMARY KEY ("ServiceName", "TopicName")
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "Welcome" (
        "Id" SERIAL PRIMARY KEY,
        "Count" INTEGER NOT NULL
    )
    "#,
];

/// Create every owned table if it does not exist. Safe to run on every start.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database named in `database_url` exists; create it if not.
/// Connects to the default `postgres` database to run CREATE DATABASE.
/// Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_admin_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a URL into (same URL pointed at the `postgres` database, db name).
fn split_admin_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no database path".into()))?
        + 1;
    let db_name = url
        .get(path_start..)
        .unwrap_or("")
        .split('?')
        .next()
        .unwrap_or("")
        .trim()
        .to_string();
    let admin_url = format!("{}postgres", url.get(..path_start).unwrap_or(url));
    Ok((admin_url, db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_admin_url_extracts_db_name() {
        let (admin, db) = split_admin_url("postgres://localhost:5432/counseling").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(db, "counseling");
    }

    #[test]
    fn split_admin_url_drops_query_string() {
        let (_, db) = split_admin_url("postgres://h/counseling?sslmode=disable").unwrap();
        assert_eq!(db, "counseling");
    }

    #[test]
    fn owned_ddl_covers_all_seven_tables() {
        assert_eq!(TABLE_DDL.len(), 7);
        for table in ["News", "Service", "Staff", "Topic", "Profile", "ServiceTopic", "Welcome"] {
            assert!(TABLE_DDL.iter().any(|d| d.contains(&format!("\"{}\"", table))));
        }
    }
}
