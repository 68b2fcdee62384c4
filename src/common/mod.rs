// Common module - shared types and utilities across all modules

pub mod error;
pub mod helpers;
pub mod id_generator;
pub mod migrations;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{conflict_on_unique, ApiError};
pub use helpers::{or_zero, round_tenths, round_whole, safe_email_log};
pub use id_generator::{generate_employee_id, generate_user_id};
pub use state::AppState;
pub use validation::ValidationResult;
