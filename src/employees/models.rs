//! Employee data models and request normalization

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Employee database model
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Employee {
    pub id: String,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<String>,
    pub status: String,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Row shape returned by the list endpoint
#[derive(FromRow, Serialize, Debug)]
pub struct EmployeeSummary {
    pub id: String,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<String>,
    pub status: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct ListEmployeesQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub department: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ListEmployeesResponse {
    pub employees: Vec<EmployeeSummary>,
    pub pagination: Pagination,
}

/// Create payload. Salary arrives as whatever the form sent (number, numeric
/// string, or "") and is normalized before validation.
#[derive(Deserialize, Debug, Default)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<serde_json::Value>,
    pub hire_date: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

/// Update payload. Replace semantics: every mutable field is overwritten from
/// this payload, and a missing status resets to "active". Hire date and the
/// employee code are immutable after creation.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<serde_json::Value>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

/// Normalized create payload, ready for insertion
#[derive(Debug, PartialEq)]
pub struct NewEmployee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

/// Normalized update payload
#[derive(Debug, PartialEq)]
pub struct EmployeeUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub status: String,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

impl CreateEmployeeRequest {
    pub fn normalize(&self) -> Result<NewEmployee, String> {
        Ok(NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: trim_to_option(self.phone.as_deref()),
            department: trim_to_option(self.department.as_deref()),
            position: trim_to_option(self.position.as_deref()),
            salary: parse_salary(self.salary.as_ref())?,
            hire_date: parse_hire_date(self.hire_date.as_deref())?,
            address: trim_to_option(self.address.as_deref()),
            emergency_contact_name: trim_to_option(self.emergency_contact_name.as_deref()),
            emergency_contact_phone: trim_to_option(self.emergency_contact_phone.as_deref()),
        })
    }
}

impl UpdateEmployeeRequest {
    pub fn normalize(&self) -> Result<EmployeeUpdate, String> {
        let status = self
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("active")
            .to_string();

        Ok(EmployeeUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: trim_to_option(self.phone.as_deref()),
            department: trim_to_option(self.department.as_deref()),
            position: trim_to_option(self.position.as_deref()),
            salary: parse_salary(self.salary.as_ref())?,
            status,
            address: trim_to_option(self.address.as_deref()),
            emergency_contact_name: trim_to_option(self.emergency_contact_name.as_deref()),
            emergency_contact_phone: trim_to_option(self.emergency_contact_phone.as_deref()),
        })
    }
}

/// Trims a string field, mapping blank to None.
fn trim_to_option(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses the salary field from a form value. Blank strings and null become
/// None; anything non-numeric is an input error, never NaN.
fn parse_salary(value: Option<&serde_json::Value>) -> Result<Option<f64>, String> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| "Salary must be a number".to_string()),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>()
                .map(Some)
                .map_err(|_| "Salary must be a number".to_string())
        }
        Some(_) => Err("Salary must be a number".to_string()),
    }
}

/// Normalizes a hire date to a plain YYYY-MM-DD calendar date. Blank becomes
/// None; full timestamps are truncated to their date part.
fn parse_hire_date(value: Option<&str>) -> Result<Option<String>, String> {
    let raw = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) => s,
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date.format("%Y-%m-%d").to_string()));
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(datetime.date_naive().format("%Y-%m-%d").to_string()));
    }

    Err("Hire date must be a valid date (YYYY-MM-DD)".to_string())
}
