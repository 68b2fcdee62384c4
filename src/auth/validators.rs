use super::models::{LoginRequest, RegisterRequest};
use crate::common::ValidationResult;

pub fn validate_register(data: &RegisterRequest) -> ValidationResult {
    let mut result = ValidationResult::new();

    if data.username.trim().is_empty() {
        result.add_error("username", "Username is required");
    }

    if data.email.trim().is_empty() {
        result.add_error("email", "Email is required");
    }

    if data.password.is_empty() {
        result.add_error("password", "Password is required");
    }

    if let Some(role) = &data.role {
        if role != "user" && role != "admin" {
            result.add_error("role", "Role must be 'user' or 'admin'");
        }
    }

    result
}

pub fn validate_login(data: &LoginRequest) -> ValidationResult {
    let mut result = ValidationResult::new();

    if data.email.trim().is_empty() {
        result.add_error("email", "Email is required");
    }

    if data.password.is_empty() {
        result.add_error("password", "Password is required");
    }

    result
}
