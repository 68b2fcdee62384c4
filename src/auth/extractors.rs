//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use super::tokens::verify_token;
use crate::common::{ApiError, AppState};

/// Authenticated user extractor
///
/// Validates the bearer token and exposes the embedded claims to handlers.
/// This is a pure signature/expiry check; no database round trip is made.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        // Extract Bearer token from Authorization header
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let token = match token {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("Access token required".into()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let bare_token = if let Some(rest) = token.strip_prefix("Bearer ") {
            rest.to_string()
        } else {
            token
        };

        let claims = match verify_token(&app_state.jwt_secret, &bare_token) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "JWT token validation failed");
                return Err(ApiError::Forbidden("Invalid or expired token".into()));
            }
        };

        Ok(AuthedUser {
            id: claims.user_id,
            email: claims.email,
            role: claims.role,
        })
    }
}
