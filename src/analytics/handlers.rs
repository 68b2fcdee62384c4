// src/analytics/handlers.rs

use axum::{extract::Extension, response::Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::*;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/analytics/departments - Per-department headcount and salary stats
pub async fn get_departments(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<DepartmentsResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let rows = sqlx::query_as::<_, DepartmentRow>(
        r#"
        SELECT
            department,
            COUNT(*) as employee_count,
            AVG(salary) as avg_salary,
            MIN(salary) as min_salary,
            MAX(salary) as max_salary,
            SUM(salary) as total_salary,
            COUNT(CASE WHEN status = 'active' THEN 1 END) as active_employees,
            COUNT(CASE WHEN status = 'inactive' THEN 1 END) as inactive_employees
        FROM employees
        WHERE department IS NOT NULL AND department != ''
        GROUP BY department
        ORDER BY employee_count DESC
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    info!(
        user_id = %authed.id,
        department_count = rows.len(),
        "Department analytics fetched"
    );

    Ok(Json(DepartmentsResponse {
        departments: rows.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/analytics/salary-analysis - Salary histogram, per-department
/// averages, and global stats
pub async fn get_salary_analysis(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<SalaryAnalysisResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let salary_ranges = sqlx::query_as::<_, SalaryRange>(
        r#"
        SELECT
            CASE
                WHEN salary < 50000 THEN '< $50K'
                WHEN salary >= 50000 AND salary < 75000 THEN '$50K - $75K'
                WHEN salary >= 75000 AND salary < 100000 THEN '$75K - $100K'
                WHEN salary >= 100000 AND salary < 150000 THEN '$100K - $150K'
                WHEN salary >= 150000 THEN '$150K+'
                ELSE 'Not Specified'
            END as salary_range,
            COUNT(*) as count
        FROM employees
        WHERE salary IS NOT NULL
        GROUP BY salary_range
        ORDER BY MIN(salary)
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    let by_department = sqlx::query_as::<_, DepartmentSalaryRow>(
        r#"
        SELECT
            department,
            AVG(salary) as avg_salary,
            COUNT(*) as employee_count
        FROM employees
        WHERE department IS NOT NULL AND department != '' AND salary IS NOT NULL
        GROUP BY department
        ORDER BY avg_salary DESC
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    let stats = sqlx::query_as::<_, SalaryStatsRow>(
        r#"
        SELECT
            AVG(salary) as avg_salary,
            MIN(salary) as min_salary,
            MAX(salary) as max_salary,
            COUNT(*) as total_employees_with_salary
        FROM employees
        WHERE salary IS NOT NULL
        "#,
    )
    .fetch_one(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    info!(user_id = %authed.id, "Salary analysis fetched");

    Ok(Json(SalaryAnalysisResponse {
        salary_ranges,
        salary_by_department: by_department.into_iter().map(Into::into).collect(),
        salary_stats: stats.into(),
    }))
}

/// GET /api/analytics/employee-metrics - Status distribution, hiring trends,
/// department growth, and per-employee tenure
pub async fn get_employee_metrics(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<EmployeeMetricsResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let status_distribution = sqlx::query_as::<_, StatusCount>(
        r#"
        SELECT status, COUNT(*) as count
        FROM employees
        GROUP BY status
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    // Trailing 12 distinct year-month buckets, newest first in SQL, then
    // reversed so the response runs oldest-to-newest.
    let mut hire_date_trends = sqlx::query_as::<_, HireTrend>(
        r#"
        SELECT
            CAST(strftime('%Y', hire_date) AS INTEGER) as year,
            CAST(strftime('%m', hire_date) AS INTEGER) as month,
            COUNT(*) as hires
        FROM employees
        WHERE hire_date IS NOT NULL
        GROUP BY year, month
        ORDER BY year DESC, month DESC
        LIMIT 12
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;
    hire_date_trends.reverse();

    let department_growth = sqlx::query_as::<_, DepartmentGrowthRow>(
        r#"
        SELECT
            department,
            COUNT(*) as current_count,
            CAST(strftime('%Y', MIN(hire_date)) AS INTEGER) as first_hire_year,
            CAST(strftime('%Y', MAX(hire_date)) AS INTEGER) as latest_hire_year
        FROM employees
        WHERE department IS NOT NULL AND department != ''
        GROUP BY department
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    let employee_tenure = sqlx::query_as::<_, EmployeeTenure>(
        r#"
        SELECT
            employee_id,
            first_name,
            last_name,
            department,
            hire_date,
            CASE
                WHEN hire_date IS NOT NULL
                THEN ROUND((julianday('now') - julianday(hire_date)) / 365.25, 1)
                ELSE 0.0
            END as tenure_years
        FROM employees
        WHERE hire_date IS NOT NULL
        ORDER BY tenure_years DESC
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    info!(user_id = %authed.id, "Employee metrics fetched");

    Ok(Json(EmployeeMetricsResponse {
        status_distribution,
        hire_date_trends,
        department_growth: department_growth.into_iter().map(Into::into).collect(),
        employee_tenure,
    }))
}

/// GET /api/analytics/dashboard-stats - Overall dashboard summary
pub async fn get_dashboard_stats(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<DashboardStatsResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let row = sqlx::query_as::<_, DashboardRow>(
        r#"
        SELECT
            COUNT(*) as total_employees,
            COUNT(CASE WHEN status = 'active' THEN 1 END) as active_employees,
            COUNT(CASE WHEN status = 'inactive' THEN 1 END) as inactive_employees,
            COUNT(DISTINCT department) as total_departments,
            AVG(salary) as avg_salary,
            MIN(salary) as min_salary,
            MAX(salary) as max_salary,
            COUNT(CASE WHEN hire_date >= date('now', '-30 days') THEN 1 END) as recent_hires,
            COUNT(CASE WHEN hire_date >= date('now', '-365 days') THEN 1 END) as hires_this_year
        FROM employees
        "#,
    )
    .fetch_one(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    info!(user_id = %authed.id, "Dashboard stats fetched");

    Ok(Json(DashboardStatsResponse { stats: row.into() }))
}

/// GET /api/analytics/department-comparison - Headcount, pay, activity, and
/// tenure per department
pub async fn get_department_comparison(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<DepartmentComparisonResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let rows = sqlx::query_as::<_, DepartmentComparisonRow>(
        r#"
        SELECT
            department,
            COUNT(*) as employee_count,
            AVG(salary) as avg_salary,
            COUNT(CASE WHEN status = 'active' THEN 1 END) as active_count,
            COUNT(CASE WHEN hire_date >= date('now', '-365 days') THEN 1 END) as new_hires_this_year,
            AVG(CASE
                WHEN hire_date IS NOT NULL
                THEN (julianday('now') - julianday(hire_date)) / 365.25
                ELSE 0.0
            END) as avg_tenure_years
        FROM employees
        WHERE department IS NOT NULL AND department != ''
        GROUP BY department
        ORDER BY employee_count DESC
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    info!(
        user_id = %authed.id,
        department_count = rows.len(),
        "Department comparison fetched"
    );

    Ok(Json(DepartmentComparisonResponse {
        departments: rows.into_iter().map(Into::into).collect(),
    }))
}
