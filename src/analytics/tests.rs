//! Tests for analytics module
//!
//! These tests verify row-to-response normalization (zero-defaulting and
//! rounding) and the exact JSON key names the frontend charts read.

#[cfg(test)]
mod tests {
    use super::super::models::*;

    #[test]
    fn test_department_row_normalization() {
        // Seeded Engineering: salaries 90000 and 80000
        let row = DepartmentRow {
            department: "Engineering".to_string(),
            employee_count: 2,
            avg_salary: Some(85000.0),
            min_salary: Some(80000.0),
            max_salary: Some(90000.0),
            total_salary: Some(170000.0),
            active_employees: 2,
            inactive_employees: 0,
        };

        let breakdown = DepartmentBreakdown::from(row);
        assert_eq!(breakdown.employee_count, 2);
        assert_eq!(breakdown.avg_salary, 85000);
        assert_eq!(breakdown.min_salary, 80000.0);
        assert_eq!(breakdown.max_salary, 90000.0);
    }

    #[test]
    fn test_department_row_without_salaries_defaults_to_zero() {
        let row = DepartmentRow {
            department: "Interns".to_string(),
            employee_count: 3,
            avg_salary: None,
            min_salary: None,
            max_salary: None,
            total_salary: None,
            active_employees: 3,
            inactive_employees: 0,
        };

        let breakdown = DepartmentBreakdown::from(row);
        assert_eq!(breakdown.avg_salary, 0);
        assert_eq!(breakdown.min_salary, 0.0);
        assert_eq!(breakdown.total_salary, 0.0);
    }

    #[test]
    fn test_avg_salary_rounds_to_whole_units() {
        let row = DepartmentSalaryRow {
            department: "Sales".to_string(),
            avg_salary: Some(69000.4),
            employee_count: 3,
        };
        assert_eq!(DepartmentSalary::from(row).avg_salary, 69000);

        let row = DepartmentSalaryRow {
            department: "Sales".to_string(),
            avg_salary: Some(69000.5),
            employee_count: 3,
        };
        assert_eq!(DepartmentSalary::from(row).avg_salary, 69001);
    }

    #[test]
    fn test_salary_stats_empty_store() {
        let row = SalaryStatsRow {
            avg_salary: None,
            min_salary: None,
            max_salary: None,
            total_employees_with_salary: 0,
        };

        let stats = SalaryStats::from(row);
        assert_eq!(stats.avg_salary, 0.0);
        assert_eq!(stats.min_salary, 0.0);
        assert_eq!(stats.max_salary, 0.0);
        assert_eq!(stats.total_employees_with_salary, 0);
    }

    #[test]
    fn test_department_growth_missing_hire_years_default_to_zero() {
        let row = DepartmentGrowthRow {
            department: "Operations".to_string(),
            current_count: 2,
            first_hire_year: None,
            latest_hire_year: None,
        };

        let growth = DepartmentGrowth::from(row);
        assert_eq!(growth.first_hire_year, 0);
        assert_eq!(growth.latest_hire_year, 0);
    }

    #[test]
    fn test_comparison_tenure_rounds_to_one_decimal() {
        let row = DepartmentComparisonRow {
            department: "Finance".to_string(),
            employee_count: 3,
            avg_salary: Some(72666.7),
            active_count: 3,
            new_hires_this_year: 1,
            avg_tenure_years: Some(2.3487),
        };

        let comparison = DepartmentComparison::from(row);
        assert_eq!(comparison.avg_tenure_years, 2.3);
        assert_eq!(comparison.avg_salary, 72667);
    }

    #[test]
    fn test_salary_analysis_response_key_names() {
        let response = SalaryAnalysisResponse {
            salary_ranges: vec![SalaryRange {
                salary_range: "$50K - $75K".to_string(),
                count: 1,
            }],
            salary_by_department: vec![],
            salary_stats: SalaryStats {
                avg_salary: 60000.0,
                min_salary: 60000.0,
                max_salary: 60000.0,
                total_employees_with_salary: 1,
            },
        };

        let json = serde_json::to_value(&response).expect("serialize");
        assert!(json.get("salaryRanges").is_some());
        assert!(json.get("salaryByDepartment").is_some());
        assert!(json.get("salaryStats").is_some());
        assert_eq!(json["salaryRanges"][0]["salary_range"], "$50K - $75K");
    }

    #[test]
    fn test_employee_metrics_response_key_names() {
        let response = EmployeeMetricsResponse {
            status_distribution: vec![],
            hire_date_trends: vec![HireTrend {
                year: 2023,
                month: 1,
                hires: 2,
            }],
            department_growth: vec![],
            employee_tenure: vec![],
        };

        let json = serde_json::to_value(&response).expect("serialize");
        assert!(json.get("statusDistribution").is_some());
        assert!(json.get("hireDateTrends").is_some());
        assert!(json.get("departmentGrowth").is_some());
        assert!(json.get("employeeTenure").is_some());
        assert_eq!(json["hireDateTrends"][0]["year"], 2023);
    }

    #[test]
    fn test_dashboard_stats_wraps_in_stats_key() {
        let row = DashboardRow {
            total_employees: 5,
            active_employees: 4,
            inactive_employees: 1,
            total_departments: 2,
            avg_salary: Some(70000.2),
            min_salary: Some(45000.0),
            max_salary: Some(95000.0),
            recent_hires: 1,
            hires_this_year: 3,
        };

        let response = DashboardStatsResponse { stats: row.into() };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["stats"]["total_employees"], 5);
        assert_eq!(json["stats"]["avg_salary"], 70000);
        assert_eq!(json["stats"]["recent_hires"], 1);
    }
}
