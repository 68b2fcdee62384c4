//! # Auth Module
//!
//! This module handles authentication and authorization:
//! - Registration and login with bcrypt password hashing
//! - Stateless JWT issue/verify
//! - The `AuthedUser` extractor gating protected endpoints
//! - Role capability checks

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod tokens;
pub mod validators;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use models::can_delete_employees;
pub use routes::auth_routes;
