//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/auth/register` - Create account, returns token
/// - `POST /api/auth/login` - Email/password login, returns token
/// - `GET /api/auth/profile` - Current user's stored profile
/// - `POST /api/auth/forgot-password` - Placeholder
/// - `GET /api/auth/health` - Liveness probe
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::register_handler))
        .route("/api/auth/login", post(handlers::login_handler))
        .route("/api/auth/profile", get(handlers::profile_handler))
        .route(
            "/api/auth/forgot-password",
            post(handlers::forgot_password_handler),
        )
        .route("/api/auth/health", get(handlers::health_handler))
}
