//! Analytics row and response models
//!
//! Aggregate queries return nullable numeric columns (AVG/MIN/MAX over a
//! nullable salary, strftime over a nullable hire date). Each row shape has
//! exactly one `From` conversion where those values are coerced, so every
//! response carries concrete numbers with 0 for absent aggregates.

use serde::Serialize;
use sqlx::FromRow;

use crate::common::{or_zero, round_tenths, round_whole};

// ---- Department breakdown ----

#[derive(FromRow, Debug)]
pub struct DepartmentRow {
    pub department: String,
    pub employee_count: i64,
    pub avg_salary: Option<f64>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub total_salary: Option<f64>,
    pub active_employees: i64,
    pub inactive_employees: i64,
}

#[derive(Serialize, Debug)]
pub struct DepartmentBreakdown {
    pub department: String,
    pub employee_count: i64,
    pub avg_salary: i64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub total_salary: f64,
    pub active_employees: i64,
    pub inactive_employees: i64,
}

impl From<DepartmentRow> for DepartmentBreakdown {
    fn from(row: DepartmentRow) -> Self {
        Self {
            department: row.department,
            employee_count: row.employee_count,
            avg_salary: round_whole(row.avg_salary),
            min_salary: or_zero(row.min_salary),
            max_salary: or_zero(row.max_salary),
            total_salary: or_zero(row.total_salary),
            active_employees: row.active_employees,
            inactive_employees: row.inactive_employees,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct DepartmentsResponse {
    pub departments: Vec<DepartmentBreakdown>,
}

// ---- Salary analysis ----

#[derive(FromRow, Serialize, Debug)]
pub struct SalaryRange {
    pub salary_range: String,
    pub count: i64,
}

#[derive(FromRow, Debug)]
pub struct DepartmentSalaryRow {
    pub department: String,
    pub avg_salary: Option<f64>,
    pub employee_count: i64,
}

#[derive(Serialize, Debug)]
pub struct DepartmentSalary {
    pub department: String,
    pub avg_salary: i64,
    pub employee_count: i64,
}

impl From<DepartmentSalaryRow> for DepartmentSalary {
    fn from(row: DepartmentSalaryRow) -> Self {
        Self {
            department: row.department,
            avg_salary: round_whole(row.avg_salary),
            employee_count: row.employee_count,
        }
    }
}

#[derive(FromRow, Debug)]
pub struct SalaryStatsRow {
    pub avg_salary: Option<f64>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub total_employees_with_salary: i64,
}

#[derive(Serialize, Debug)]
pub struct SalaryStats {
    pub avg_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub total_employees_with_salary: i64,
}

impl From<SalaryStatsRow> for SalaryStats {
    fn from(row: SalaryStatsRow) -> Self {
        Self {
            avg_salary: or_zero(row.avg_salary),
            min_salary: or_zero(row.min_salary),
            max_salary: or_zero(row.max_salary),
            total_employees_with_salary: row.total_employees_with_salary,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SalaryAnalysisResponse {
    #[serde(rename = "salaryRanges")]
    pub salary_ranges: Vec<SalaryRange>,
    #[serde(rename = "salaryByDepartment")]
    pub salary_by_department: Vec<DepartmentSalary>,
    #[serde(rename = "salaryStats")]
    pub salary_stats: SalaryStats,
}

// ---- Employee metrics ----

#[derive(FromRow, Serialize, Debug)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(FromRow, Serialize, Debug)]
pub struct HireTrend {
    pub year: i64,
    pub month: i64,
    pub hires: i64,
}

#[derive(FromRow, Debug)]
pub struct DepartmentGrowthRow {
    pub department: String,
    pub current_count: i64,
    pub first_hire_year: Option<i64>,
    pub latest_hire_year: Option<i64>,
}

#[derive(Serialize, Debug)]
pub struct DepartmentGrowth {
    pub department: String,
    pub current_count: i64,
    pub first_hire_year: i64,
    pub latest_hire_year: i64,
}

impl From<DepartmentGrowthRow> for DepartmentGrowth {
    fn from(row: DepartmentGrowthRow) -> Self {
        Self {
            department: row.department,
            current_count: row.current_count,
            first_hire_year: row.first_hire_year.unwrap_or(0),
            latest_hire_year: row.latest_hire_year.unwrap_or(0),
        }
    }
}

#[derive(FromRow, Serialize, Debug)]
pub struct EmployeeTenure {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub hire_date: String,
    pub tenure_years: f64,
}

#[derive(Serialize, Debug)]
pub struct EmployeeMetricsResponse {
    #[serde(rename = "statusDistribution")]
    pub status_distribution: Vec<StatusCount>,
    #[serde(rename = "hireDateTrends")]
    pub hire_date_trends: Vec<HireTrend>,
    #[serde(rename = "departmentGrowth")]
    pub department_growth: Vec<DepartmentGrowth>,
    #[serde(rename = "employeeTenure")]
    pub employee_tenure: Vec<EmployeeTenure>,
}

// ---- Dashboard ----

#[derive(FromRow, Debug)]
pub struct DashboardRow {
    pub total_employees: i64,
    pub active_employees: i64,
    pub inactive_employees: i64,
    pub total_departments: i64,
    pub avg_salary: Option<f64>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub recent_hires: i64,
    pub hires_this_year: i64,
}

#[derive(Serialize, Debug)]
pub struct DashboardStats {
    pub total_employees: i64,
    pub active_employees: i64,
    pub inactive_employees: i64,
    pub total_departments: i64,
    pub avg_salary: i64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub recent_hires: i64,
    pub hires_this_year: i64,
}

impl From<DashboardRow> for DashboardStats {
    fn from(row: DashboardRow) -> Self {
        Self {
            total_employees: row.total_employees,
            active_employees: row.active_employees,
            inactive_employees: row.inactive_employees,
            total_departments: row.total_departments,
            avg_salary: round_whole(row.avg_salary),
            min_salary: or_zero(row.min_salary),
            max_salary: or_zero(row.max_salary),
            recent_hires: row.recent_hires,
            hires_this_year: row.hires_this_year,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct DashboardStatsResponse {
    pub stats: DashboardStats,
}

// ---- Department comparison ----

#[derive(FromRow, Debug)]
pub struct DepartmentComparisonRow {
    pub department: String,
    pub employee_count: i64,
    pub avg_salary: Option<f64>,
    pub active_count: i64,
    pub new_hires_this_year: i64,
    pub avg_tenure_years: Option<f64>,
}

#[derive(Serialize, Debug)]
pub struct DepartmentComparison {
    pub department: String,
    pub employee_count: i64,
    pub avg_salary: i64,
    pub active_count: i64,
    pub new_hires_this_year: i64,
    pub avg_tenure_years: f64,
}

impl From<DepartmentComparisonRow> for DepartmentComparison {
    fn from(row: DepartmentComparisonRow) -> Self {
        Self {
            department: row.department,
            employee_count: row.employee_count,
            avg_salary: round_whole(row.avg_salary),
            active_count: row.active_count,
            new_hires_this_year: row.new_hires_this_year,
            avg_tenure_years: round_tenths(row.avg_tenure_years),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct DepartmentComparisonResponse {
    pub departments: Vec<DepartmentComparison>,
}
