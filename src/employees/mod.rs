//! # Employees Module
//!
//! This module handles the employee record store:
//! - CRUD operations with request normalization
//! - Search, department filter, and pagination
//! - Admin-gated deletion

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::employees_routes;
