//! # Analytics Module
//!
//! Read-side aggregation over the employee store: department breakdowns,
//! salary analysis, hiring and tenure metrics, and the dashboard summary.
//! No endpoint here mutates anything.

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::analytics_routes;
