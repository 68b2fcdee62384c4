//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// JWT claims structure. Field names match the wire payload the frontend
/// expects: {userId, email, role, exp}.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

/// User database model. The password hash never leaves the handlers.
#[derive(FromRow, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub google_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Public user fields for API responses
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub role: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

/// Capability check for employee deletion. Takes the caller's role explicitly
/// so handlers and tests never re-read shared state to answer it.
pub fn can_delete_employees(role: &str) -> bool {
    role == "admin"
}
