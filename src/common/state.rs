// Application state shared across all modules

use sqlx::SqlitePool;

/// Application state containing the database pool and configuration.
/// Built once at startup from the environment and treated as immutable.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_secret: String,
    /// Token lifetime in hours.
    pub token_ttl_hours: i64,
}
