//! Authentication handlers

use axum::{
    extract::{Extension, Json},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::models::{ForgotPasswordRequest, LoginRequest, PublicUser, RegisterRequest, User};
use super::tokens::{issue_token, verify_token};
use super::validators;
use crate::common::{conflict_on_unique, generate_user_id, safe_email_log, ApiError, AppState};

const BCRYPT_COST: u32 = 10;

/// POST /api/auth/register
/// Creates a new user account and returns a fresh token.
///
/// # Request Body
/// ```json
/// { "username": "...", "email": "...", "password": "...", "role": "user" }
/// ```
pub async fn register_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();

    validators::validate_register(&payload).into_result()?;

    let role = payload.role.unwrap_or_else(|| "user".to_string());

    // Check if user already exists
    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM users WHERE email = ? OR username = ?")
            .bind(&payload.email)
            .bind(&payload.username)
            .fetch_optional(&state.db)
            .await
            .map_err(ApiError::DatabaseError)?;

    if existing.is_some() {
        warn!(
            email = %safe_email_log(&payload.email),
            "Registration rejected: email or username already taken"
        );
        return Err(ApiError::BadRequest(
            "User already exists with this email or username".to_string(),
        ));
    }

    let hashed_password = bcrypt::hash(&payload.password, BCRYPT_COST).map_err(|e| {
        error!(error = %e, "Password hashing failed during registration");
        ApiError::InternalServer("Server error during registration".to_string())
    })?;

    let user_id = generate_user_id();

    // Two concurrent registrations with the same email can both pass the
    // pre-check; the UNIQUE constraints decide the winner.
    sqlx::query("INSERT INTO users (id, username, email, password, role) VALUES (?, ?, ?, ?, ?)")
        .bind(&user_id)
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(&hashed_password)
        .bind(&role)
        .execute(&state.db)
        .await
        .map_err(|e| conflict_on_unique(e, "User already exists with this email or username"))?;

    let token = issue_token(
        &state.jwt_secret,
        chrono::Duration::hours(state.token_ttl_hours),
        &user_id,
        &payload.email,
        &role,
    )
    .map_err(|e| {
        error!(error = %e, user_id = %user_id, "JWT encoding error during registration");
        ApiError::InternalServer("jwt error".to_string())
    })?;

    info!(
        user_id = %user_id,
        email = %safe_email_log(&payload.email),
        role = %role,
        "New user registered"
    );

    let resp = serde_json::json!({
        "message": "User created successfully",
        "token": token,
        "user": {
            "id": user_id,
            "username": payload.username,
            "email": payload.email,
            "role": role,
        },
    });

    Ok((StatusCode::CREATED, Json(resp)))
}

/// POST /api/auth/login
/// Authenticates a user by email and password.
///
/// Unknown email and wrong password produce the identical response so callers
/// cannot tell which check failed.
pub async fn login_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    validators::validate_login(&payload).into_result()?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&payload.email)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    let user = match user {
        Some(u) => u,
        None => {
            warn!(
                email = %safe_email_log(&payload.email),
                "Login failed: no user with this email"
            );
            return Err(ApiError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }
    };

    let password_valid = bcrypt::verify(&payload.password, &user.password).map_err(|e| {
        error!(error = %e, user_id = %user.id, "Password verification failed");
        ApiError::InternalServer("Server error during login".to_string())
    })?;

    if !password_valid {
        warn!(user_id = %user.id, "Login failed: wrong password");
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = issue_token(
        &state.jwt_secret,
        chrono::Duration::hours(state.token_ttl_hours),
        &user.id,
        &user.email,
        &user.role,
    )
    .map_err(|e| {
        error!(error = %e, user_id = %user.id, "JWT encoding error during login");
        ApiError::InternalServer("jwt error".to_string())
    })?;

    info!(
        user_id = %user.id,
        email = %safe_email_log(&user.email),
        "Login successful"
    );

    let resp = serde_json::json!({
        "message": "Login successful",
        "token": token,
        "user": {
            "id": user.id,
            "username": user.username,
            "email": user.email,
            "role": user.role,
        },
    });

    Ok(Json(resp))
}

/// GET /api/auth/profile
/// Returns the authenticated user's stored profile.
///
/// Checks the token inline rather than via the extractor: a bad token here is
/// 401, and a valid token whose user row has vanished is 404.
pub async fn profile_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let token = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_string());

    let token = match token {
        Some(t) => t,
        None => return Err(ApiError::Unauthorized("No token provided".to_string())),
    };

    let claims = verify_token(&state.jwt_secret, &token).map_err(|e| {
        warn!(error = %e, "Profile request with invalid token");
        ApiError::Unauthorized("Invalid token".to_string())
    })?;

    let user: Option<PublicUser> = sqlx::query_as(
        "SELECT id, username, email, role, created_at FROM users WHERE id = ?",
    )
    .bind(&claims.user_id)
    .fetch_optional(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    let user = match user {
        Some(u) => u,
        None => {
            warn!(user_id = %claims.user_id, "Profile request: user not found");
            return Err(ApiError::NotFound("User not found".to_string()));
        }
    };

    Ok(Json(serde_json::json!({ "user": user })))
}

/// POST /api/auth/forgot-password
/// Placeholder; no reset mail is sent.
pub async fn forgot_password_handler(
    Json(payload): Json<ForgotPasswordRequest>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Password reset functionality will be implemented in next phase",
        "email": payload.email,
    }))
}

/// GET /api/auth/health
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Auth routes are working!" }))
}
