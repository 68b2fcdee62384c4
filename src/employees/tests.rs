//! Tests for employees module
//!
//! These tests verify request normalization, validation, and pagination math.

#[cfg(test)]
mod tests {
    use super::super::*;
    use super::super::models::{CreateEmployeeRequest, Pagination, UpdateEmployeeRequest};

    fn valid_create_request() -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            employee_id: "ENG001".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            email: "sarah.wilson@company.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let request = CreateEmployeeRequest {
            employee_id: "  ENG001  ".to_string(),
            first_name: " Sarah ".to_string(),
            last_name: " Wilson ".to_string(),
            email: "  Sarah.Wilson@Company.COM ".to_string(),
            phone: Some("   ".to_string()),
            ..Default::default()
        };

        let normalized = request.normalize().expect("normalize");
        assert_eq!(normalized.employee_id, "ENG001");
        assert_eq!(normalized.first_name, "Sarah");
        assert_eq!(normalized.email, "sarah.wilson@company.com");
        // Whitespace-only optional fields become None, not ""
        assert_eq!(normalized.phone, None);
    }

    #[test]
    fn test_blank_salary_becomes_null() {
        let mut request = valid_create_request();
        request.salary = Some(serde_json::Value::String("".to_string()));

        let normalized = request.normalize().expect("normalize");
        assert_eq!(normalized.salary, None);
    }

    #[test]
    fn test_salary_accepts_number_and_numeric_string() {
        let mut request = valid_create_request();
        request.salary = Some(serde_json::json!(95000));
        assert_eq!(request.normalize().expect("normalize").salary, Some(95000.0));

        request.salary = Some(serde_json::Value::String("78000.50".to_string()));
        assert_eq!(
            request.normalize().expect("normalize").salary,
            Some(78000.5)
        );
    }

    #[test]
    fn test_non_numeric_salary_is_an_error() {
        let mut request = valid_create_request();
        request.salary = Some(serde_json::Value::String("lots".to_string()));

        assert!(request.normalize().is_err());
    }

    #[test]
    fn test_hire_date_normalization() {
        let mut request = valid_create_request();

        request.hire_date = Some("2022-03-15".to_string());
        assert_eq!(
            request.normalize().expect("normalize").hire_date,
            Some("2022-03-15".to_string())
        );

        // Timestamps are truncated to the calendar date
        request.hire_date = Some("2022-03-15T10:30:00Z".to_string());
        assert_eq!(
            request.normalize().expect("normalize").hire_date,
            Some("2022-03-15".to_string())
        );

        request.hire_date = Some("".to_string());
        assert_eq!(request.normalize().expect("normalize").hire_date, None);

        request.hire_date = Some("not-a-date".to_string());
        assert!(request.normalize().is_err());
    }

    #[test]
    fn test_validate_new_employee_required_fields() {
        let request = CreateEmployeeRequest::default();
        let normalized = request.normalize().expect("normalize");

        let result = validators::validate_new_employee(&normalized);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "employee_id"));
        assert!(result.errors.iter().any(|e| e.field == "first_name"));
        assert!(result.errors.iter().any(|e| e.field == "last_name"));
        assert!(result.errors.iter().any(|e| e.field == "email"));
    }

    #[test]
    fn test_validate_new_employee_rejects_negative_salary() {
        let mut request = valid_create_request();
        request.salary = Some(serde_json::json!(-1));

        let normalized = request.normalize().expect("normalize");
        let result = validators::validate_new_employee(&normalized);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "salary"));
    }

    #[test]
    fn test_validate_new_employee_accepts_valid() {
        let normalized = valid_create_request().normalize().expect("normalize");
        assert!(validators::validate_new_employee(&normalized).is_valid());
    }

    #[test]
    fn test_update_without_status_resets_to_active() {
        // Replace-not-patch: an update that omits status always lands on
        // "active", even if the stored record was inactive.
        let request = UpdateEmployeeRequest {
            first_name: "Mark".to_string(),
            last_name: "Adams".to_string(),
            email: "mark.adams@company.com".to_string(),
            status: None,
            ..Default::default()
        };

        let update = request.normalize().expect("normalize");
        assert_eq!(update.status, "active");
    }

    #[test]
    fn test_update_keeps_supplied_status() {
        let request = UpdateEmployeeRequest {
            first_name: "Mark".to_string(),
            last_name: "Adams".to_string(),
            email: "mark.adams@company.com".to_string(),
            status: Some("inactive".to_string()),
            ..Default::default()
        };

        let update = request.normalize().expect("normalize");
        assert_eq!(update.status, "inactive");
    }

    #[test]
    fn test_update_rejects_unknown_status() {
        let request = UpdateEmployeeRequest {
            first_name: "Mark".to_string(),
            last_name: "Adams".to_string(),
            email: "mark.adams@company.com".to_string(),
            status: Some("terminated".to_string()),
            ..Default::default()
        };

        let update = request.normalize().expect("normalize");
        let result = validators::validate_employee_update(&update);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "status"));
    }

    #[test]
    fn test_pagination_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 10, 0).pages, 0);
        assert_eq!(Pagination::new(1, 10, 10).pages, 1);
        assert_eq!(Pagination::new(1, 10, 11).pages, 2);
        assert_eq!(Pagination::new(2, 10, 95).pages, 10);
    }

    #[test]
    fn test_pagination_carries_inputs_through() {
        let p = Pagination::new(3, 25, 51);
        assert_eq!(p.page, 3);
        assert_eq!(p.limit, 25);
        assert_eq!(p.total, 51);
        assert_eq!(p.pages, 3);
    }
}
