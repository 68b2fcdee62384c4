use super::handlers;
use axum::{routing::get, Router};

/// Creates the analytics router. Every route requires an authenticated user
/// (any role) via the AuthedUser extractor in the handlers.
pub fn analytics_routes() -> Router {
    Router::new()
        .route("/api/analytics/departments", get(handlers::get_departments))
        .route(
            "/api/analytics/salary-analysis",
            get(handlers::get_salary_analysis),
        )
        .route(
            "/api/analytics/employee-metrics",
            get(handlers::get_employee_metrics),
        )
        .route(
            "/api/analytics/dashboard-stats",
            get(handlers::get_dashboard_stats),
        )
        .route(
            "/api/analytics/department-comparison",
            get(handlers::get_department_comparison),
        )
}
