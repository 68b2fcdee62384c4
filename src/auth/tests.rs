//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Token issue/verify roundtrip and failure modes
//! - Password hashing
//! - Request validation
//! - Role capability checks

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::auth::tokens::{issue_token, verify_token};
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    #[test]
    fn test_token_roundtrip() {
        let secret = "test_secret_key";
        let token = issue_token(
            secret,
            Duration::hours(24),
            "U_TEST01",
            "test@example.com",
            "user",
        )
        .expect("issue");

        let claims = verify_token(secret, &token).expect("verify");
        assert_eq!(claims.user_id, "U_TEST01");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, "user");
        assert!(claims.exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let token = issue_token(
            "right_secret",
            Duration::hours(24),
            "U_TEST01",
            "test@example.com",
            "user",
        )
        .expect("issue");

        assert!(verify_token("wrong_secret", &token).is_err());
    }

    #[test]
    fn test_short_lived_token_expires() {
        // A token whose lifetime has already elapsed must be rejected by the
        // zero-leeway verifier, no matter how recently it was issued.
        let secret = "test_secret_key";
        let token = issue_token(
            secret,
            Duration::seconds(-2),
            "U_TEST01",
            "test@example.com",
            "user",
        )
        .expect("issue");

        assert!(verify_token(secret, &token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Build a token whose exp is already in the past; zero-leeway
        // verification must reject it.
        let secret = "test_secret_key";
        let claims = models::Claims {
            user_id: "U_TEST01".to_string(),
            email: "test@example.com".to_string(),
            role: "user".to_string(),
            exp: (Utc::now().timestamp() - 1) as usize,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encode");

        assert!(
            verify_token(secret, &token).is_err(),
            "Token past its expiry should be rejected"
        );
    }

    #[test]
    fn test_claims_wire_format() {
        // The frontend reads userId/email/role from the token payload.
        let claims = models::Claims {
            user_id: "U_TEST01".to_string(),
            email: "a@b.com".to_string(),
            role: "admin".to_string(),
            exp: 1234567890,
        };

        let json = serde_json::to_value(&claims).expect("serialize");
        assert_eq!(json["userId"], "U_TEST01");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["role"], "admin");
        assert_eq!(json["exp"], 1234567890);
    }

    #[test]
    fn test_bcrypt_hash_and_verify() {
        // Low cost keeps the test fast; production uses cost 10.
        let hash = bcrypt::hash("secret123", 4).expect("hash");

        assert!(bcrypt::verify("secret123", &hash).expect("verify"));
        assert!(!bcrypt::verify("wrong-password", &hash).expect("verify"));
    }

    #[test]
    fn test_bcrypt_hashes_are_salted() {
        let h1 = bcrypt::hash("same_password", 4).expect("hash");
        let h2 = bcrypt::hash("same_password", 4).expect("hash");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_can_delete_employees() {
        assert!(models::can_delete_employees("admin"));
        assert!(!models::can_delete_employees("user"));
        assert!(!models::can_delete_employees(""));
        assert!(!models::can_delete_employees("Admin"));
    }

    #[test]
    fn test_validate_register_requires_fields() {
        let request = models::RegisterRequest {
            username: "".to_string(),
            email: "".to_string(),
            password: "".to_string(),
            role: None,
        };

        let result = validators::validate_register(&request);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "username"));
        assert!(result.errors.iter().any(|e| e.field == "email"));
        assert!(result.errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_validate_register_rejects_unknown_role() {
        let request = models::RegisterRequest {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password: "secret123".to_string(),
            role: Some("superuser".to_string()),
        };

        let result = validators::validate_register(&request);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "role"));
    }

    #[test]
    fn test_validate_register_accepts_valid_request() {
        let request = models::RegisterRequest {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password: "secret123".to_string(),
            role: Some("admin".to_string()),
        };

        assert!(validators::validate_register(&request).is_valid());
    }

    #[test]
    fn test_validate_login_requires_fields() {
        let request = models::LoginRequest {
            email: "".to_string(),
            password: "".to_string(),
        };

        let result = validators::validate_login(&request);
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 2);
    }
}
