//! Employee CRUD handlers

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::models::{
    CreateEmployeeRequest, Employee, EmployeeSummary, ListEmployeesQuery, ListEmployeesResponse,
    Pagination, UpdateEmployeeRequest,
};
use super::validators;
use crate::auth::{can_delete_employees, AuthedUser};
use crate::common::{conflict_on_unique, generate_employee_id, ApiError, AppState};

const SUMMARY_COLUMNS: &str = "id, employee_id, first_name, last_name, email, phone, \
                               department, position, salary, hire_date, status";

/// GET /api/employees/health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Employee routes are working!" }))
}

/// GET /api/employees - List employees with search, filter, and pagination
///
/// `search` matches first name, last name, email, or employee code
/// case-insensitively; `department` is an exact match. Ordered newest first.
pub async fn list_employees(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<Json<ListEmployeesResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).max(1);
    let offset = (page - 1) * limit;
    let search = query.search.unwrap_or_default();
    let department = query.department.unwrap_or_default();

    let mut filter = String::from(" FROM employees WHERE 1=1");
    if !search.is_empty() {
        filter.push_str(
            " AND (first_name LIKE ? OR last_name LIKE ? OR email LIKE ? OR employee_id LIKE ?)",
        );
    }
    if !department.is_empty() {
        filter.push_str(" AND department = ?");
    }

    let pattern = format!("%{}%", search);

    let list_sql = format!(
        "SELECT {}{} ORDER BY created_at DESC LIMIT ? OFFSET ?",
        SUMMARY_COLUMNS, filter
    );
    let mut list_query = sqlx::query_as::<_, EmployeeSummary>(&list_sql);
    if !search.is_empty() {
        list_query = list_query
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern);
    }
    if !department.is_empty() {
        list_query = list_query.bind(&department);
    }
    let employees = list_query
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    let count_sql = format!("SELECT COUNT(*){}", filter);
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    if !search.is_empty() {
        count_query = count_query
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern);
    }
    if !department.is_empty() {
        count_query = count_query.bind(&department);
    }
    let total = count_query
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok(Json(ListEmployeesResponse {
        employees,
        pagination: Pagination::new(page, limit, total),
    }))
}

/// GET /api/employees/:id
pub async fn get_employee(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let employee: Option<Employee> = sqlx::query_as("SELECT * FROM employees WHERE id = ?")
        .bind(&id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    match employee {
        Some(e) => Ok(Json(serde_json::json!({ "employee": e }))),
        None => Err(ApiError::NotFound("Employee not found".to_string())),
    }
}

/// POST /api/employees - Create a new employee record
pub async fn create_employee(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();

    let new_employee = request.normalize().map_err(ApiError::ValidationError)?;
    validators::validate_new_employee(&new_employee).into_result()?;

    // Check if employee_id or email already exists
    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM employees WHERE employee_id = ? OR email = ?")
            .bind(&new_employee.employee_id)
            .bind(&new_employee.email)
            .fetch_optional(&state.db)
            .await
            .map_err(ApiError::DatabaseError)?;

    if existing.is_some() {
        warn!(
            employee_code = %new_employee.employee_id,
            "Employee creation rejected: code or email already in use"
        );
        return Err(ApiError::Conflict(
            "Employee with this ID or email already exists".to_string(),
        ));
    }

    let id = generate_employee_id();

    sqlx::query(
        r#"
        INSERT INTO employees (
            id, employee_id, first_name, last_name, email, phone,
            department, position, salary, hire_date, address,
            emergency_contact_name, emergency_contact_phone, created_by
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&new_employee.employee_id)
    .bind(&new_employee.first_name)
    .bind(&new_employee.last_name)
    .bind(&new_employee.email)
    .bind(new_employee.phone.as_deref())
    .bind(new_employee.department.as_deref())
    .bind(new_employee.position.as_deref())
    .bind(new_employee.salary)
    .bind(new_employee.hire_date.as_deref())
    .bind(new_employee.address.as_deref())
    .bind(new_employee.emergency_contact_name.as_deref())
    .bind(new_employee.emergency_contact_phone.as_deref())
    .bind(&authed.id)
    .execute(&state.db)
    .await
    .map_err(|e| conflict_on_unique(e, "Employee with this ID or email already exists"))?;

    info!(
        id = %id,
        employee_code = %new_employee.employee_id,
        created_by = %authed.id,
        "Employee created"
    );

    let resp = serde_json::json!({
        "message": "Employee created successfully",
        "employee": {
            "id": id,
            "employee_id": new_employee.employee_id,
            "first_name": new_employee.first_name,
            "last_name": new_employee.last_name,
            "email": new_employee.email,
        },
    });

    Ok((StatusCode::CREATED, Json(resp)))
}

/// PUT /api/employees/:id - Replace an employee's mutable fields
///
/// Replace, not patch: omitted fields are cleared, and an omitted status
/// resets to "active" regardless of the stored value. The employee code and
/// owner never change.
pub async fn update_employee(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let exists: Option<(String,)> = sqlx::query_as("SELECT id FROM employees WHERE id = ?")
        .bind(&id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    if exists.is_none() {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let update = request.normalize().map_err(ApiError::ValidationError)?;
    validators::validate_employee_update(&update).into_result()?;

    sqlx::query(
        r#"
        UPDATE employees SET
            first_name = ?, last_name = ?, email = ?, phone = ?,
            department = ?, position = ?, salary = ?, status = ?,
            address = ?, emergency_contact_name = ?, emergency_contact_phone = ?,
            updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(&update.first_name)
    .bind(&update.last_name)
    .bind(&update.email)
    .bind(update.phone.as_deref())
    .bind(update.department.as_deref())
    .bind(update.position.as_deref())
    .bind(update.salary)
    .bind(&update.status)
    .bind(update.address.as_deref())
    .bind(update.emergency_contact_name.as_deref())
    .bind(update.emergency_contact_phone.as_deref())
    .bind(&id)
    .execute(&state.db)
    .await
    .map_err(|e| conflict_on_unique(e, "Employee with this email already exists"))?;

    info!(id = %id, "Employee updated");

    Ok(Json(serde_json::json!({
        "message": "Employee updated successfully"
    })))
}

/// DELETE /api/employees/:id - Permanently delete an employee (admin only)
pub async fn delete_employee(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    if !can_delete_employees(&authed.role) {
        warn!(
            user_id = %authed.id,
            role = %authed.role,
            "Employee deletion denied: admin role required"
        );
        return Err(ApiError::Forbidden("Admin access required".to_string()));
    }

    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    info!(id = %id, deleted_by = %authed.id, "Employee deleted");

    Ok(Json(serde_json::json!({
        "message": "Employee deleted successfully"
    })))
}
