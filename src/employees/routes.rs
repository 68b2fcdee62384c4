use super::handlers;
use axum::{routing::get, Router};

/// Creates the employees router with all employee-related routes
pub fn employees_routes() -> Router {
    Router::new()
        .route("/api/employees/health", get(handlers::health_check))
        .route(
            "/api/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/api/employees/:id",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
}
