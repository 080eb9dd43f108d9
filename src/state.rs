//! Shared application state for all routes.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Kept alongside the pool: the raw-SQL endpoint opens its own
    /// connection per request instead of borrowing from the pool.
    pub database_url: String,
}
