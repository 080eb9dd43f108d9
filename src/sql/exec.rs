//! Ad-hoc SQL execution on a dedicated connection.
//!
//! Each call opens a fresh connection from the configured URL rather than
//! borrowing from the shared pool; the original system required this
//! isolation for driver stability under concurrent access. The connection
//! is closed on every exit path before the outcome is returned.

use crate::sql::row::row_to_json;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgDatabaseError, PgErrorPosition};
use sqlx::{ConnectOptions, Connection, Executor};
use std::str::FromStr;

/// Failure modes of a raw query, split for status mapping: engine-reported
/// errors become client errors, everything else is a server error.
#[derive(Debug)]
pub enum RawQueryError {
    /// The engine rejected the statement (syntax error, constraint
    /// violation, unknown relation, ...). `position` is the 1-based
    /// character offset of a syntax problem when the engine reports one.
    Query {
        message: String,
        position: Option<usize>,
    },
    /// Bad URL, connect failure, or any other driver-level error.
    Connection(String),
}

/// Execute one or more SQL statements and materialize every returned row.
///
/// Uses the simple query protocol so multi-statement input works; rows from
/// all result sets are concatenated in order. No allow-list and no
/// parameterization: this backs an intentional admin/debug endpoint.
pub async fn run_raw_query(database_url: &str, sql: &str) -> Result<Vec<Value>, RawQueryError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| RawQueryError::Connection(e.to_string()))?;
    let mut conn: PgConnection = opts
        .connect()
        .await
        .map_err(|e| RawQueryError::Connection(e.to_string()))?;

    // Called through `Executor::fetch_all` rather than
    // `raw_sql(..).fetch_all(&mut conn)`: the latter trips a rustc
    // limitation ("implementation of `Executor` is not general enough")
    // when this future must be `Send` for the axum handler.
    let result = conn.fetch_all(sqlx::raw_sql(sql)).await;
    let _ = conn.close().await;

    match result {
        Ok(rows) => Ok(rows.iter().map(row_to_json).collect()),
        Err(sqlx::Error::Database(db)) => {
            let position = db
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(|pg| pg.position())
                .map(|p| match p {
                    PgErrorPosition::Original(n) => n,
                    PgErrorPosition::Internal { position, .. } => position,
                });
            Err(RawQueryError::Query {
                message: db.message().to_string(),
                position,
            })
        }
        Err(e) => Err(RawQueryError::Connection(e.to_string())),
    }
}
