//! Token issuing and verification
//!
//! Tokens are stateless HS256 JWTs carrying {userId, email, role, exp}. The
//! server keeps no session table, so a token stays valid until its expiry;
//! logout is client-side token discard.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::models::Claims;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    Encode(jsonwebtoken::errors::Error),

    #[error("Invalid or expired token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

/// Issues a signed token for the given identity, expiring `ttl` from now.
pub fn issue_token(
    secret: &str,
    ttl: Duration,
    user_id: &str,
    email: &str,
    role: &str,
) -> Result<String, TokenError> {
    let exp = (Utc::now() + ttl).timestamp() as usize;
    let claims = Claims {
        user_id: user_id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Encode)
}

/// Verifies a token's signature and expiry and returns the embedded claims.
/// Expiry is checked with zero leeway so a 1-second token really dies after
/// 1 second.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(TokenError::Invalid)
}
