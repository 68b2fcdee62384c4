use super::models::{EmployeeUpdate, NewEmployee};
use crate::common::ValidationResult;

pub fn validate_new_employee(data: &NewEmployee) -> ValidationResult {
    let mut result = ValidationResult::new();

    if data.employee_id.is_empty() {
        result.add_error("employee_id", "Employee ID is required");
    }

    if data.first_name.is_empty() {
        result.add_error("first_name", "First name is required");
    }

    if data.last_name.is_empty() {
        result.add_error("last_name", "Last name is required");
    }

    if data.email.is_empty() {
        result.add_error("email", "Email is required");
    }

    if let Some(salary) = data.salary {
        if salary < 0.0 {
            result.add_error("salary", "Salary cannot be negative");
        }
    }

    result
}

pub fn validate_employee_update(data: &EmployeeUpdate) -> ValidationResult {
    let mut result = ValidationResult::new();

    if data.first_name.is_empty() {
        result.add_error("first_name", "First name is required");
    }

    if data.last_name.is_empty() {
        result.add_error("last_name", "Last name is required");
    }

    if data.email.is_empty() {
        result.add_error("email", "Email is required");
    }

    if let Some(salary) = data.salary {
        if salary < 0.0 {
            result.add_error("salary", "Salary cannot be negative");
        }
    }

    if data.status != "active" && data.status != "inactive" {
        result.add_error("status", "Status must be 'active' or 'inactive'");
    }

    result
}
