//! Counseling-site REST backend: CRUD endpoints over PostgreSQL plus a
//! raw-SQL admin endpoint with dynamic row materialization.

pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use error::AppError;
pub use response::{ok, ok_counted, ok_mirror, with_message};
pub use routes::{api_routes, common_routes};
pub use sql::{row_to_json, run_raw_query, RawQueryError};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
