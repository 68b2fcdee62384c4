// seed.rs
// Seeds the database with an admin account and a sample employee roster.
// Existing rows are left untouched, so the seed is safe to re-run.

use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{env, str::FromStr};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod common;

use common::{generate_employee_id, generate_user_id};

struct SampleEmployee {
    employee_id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    department: &'static str,
    position: &'static str,
    salary: f64,
    hire_date: &'static str,
    status: &'static str,
}

const SAMPLE_EMPLOYEES: &[SampleEmployee] = &[
    // Engineering
    SampleEmployee { employee_id: "ENG001", first_name: "Sarah", last_name: "Wilson", email: "sarah.wilson@company.com", phone: "+1234567893", department: "Engineering", position: "Senior Software Engineer", salary: 95000.0, hire_date: "2022-03-15", status: "active" },
    SampleEmployee { employee_id: "ENG002", first_name: "David", last_name: "Chen", email: "david.chen@company.com", phone: "+1234567894", department: "Engineering", position: "Frontend Developer", salary: 78000.0, hire_date: "2023-01-20", status: "active" },
    SampleEmployee { employee_id: "ENG003", first_name: "Emily", last_name: "Rodriguez", email: "emily.rodriguez@company.com", phone: "+1234567895", department: "Engineering", position: "DevOps Engineer", salary: 88000.0, hire_date: "2022-08-10", status: "active" },
    SampleEmployee { employee_id: "ENG004", first_name: "Michael", last_name: "Taylor", email: "michael.taylor@company.com", phone: "+1234567896", department: "Engineering", position: "Backend Developer", salary: 85000.0, hire_date: "2023-05-15", status: "active" },
    // Marketing
    SampleEmployee { employee_id: "MKT001", first_name: "Lisa", last_name: "Anderson", email: "lisa.anderson@company.com", phone: "+1234567897", department: "Marketing", position: "Digital Marketing Specialist", salary: 62000.0, hire_date: "2022-11-30", status: "active" },
    SampleEmployee { employee_id: "MKT002", first_name: "James", last_name: "Brown", email: "james.brown@company.com", phone: "+1234567898", department: "Marketing", position: "Content Creator", salary: 55000.0, hire_date: "2023-02-14", status: "active" },
    SampleEmployee { employee_id: "MKT003", first_name: "Rachel", last_name: "Davis", email: "rachel.davis@company.com", phone: "+1234567899", department: "Marketing", position: "SEO Specialist", salary: 58000.0, hire_date: "2022-09-22", status: "active" },
    // Sales
    SampleEmployee { employee_id: "SAL001", first_name: "Robert", last_name: "Johnson", email: "robert.johnson@company.com", phone: "+1234567900", department: "Sales", position: "Sales Representative", salary: 50000.0, hire_date: "2022-06-01", status: "active" },
    SampleEmployee { employee_id: "SAL002", first_name: "Amanda", last_name: "Miller", email: "amanda.miller@company.com", phone: "+1234567901", department: "Sales", position: "Senior Sales Executive", salary: 72000.0, hire_date: "2021-12-15", status: "active" },
    SampleEmployee { employee_id: "SAL003", first_name: "Kevin", last_name: "Garcia", email: "kevin.garcia@company.com", phone: "+1234567902", department: "Sales", position: "Sales Manager", salary: 85000.0, hire_date: "2021-08-30", status: "active" },
    // Finance
    SampleEmployee { employee_id: "FIN001", first_name: "Jennifer", last_name: "White", email: "jennifer.white@company.com", phone: "+1234567903", department: "Finance", position: "Financial Analyst", salary: 68000.0, hire_date: "2022-04-18", status: "active" },
    SampleEmployee { employee_id: "FIN002", first_name: "Christopher", last_name: "Lee", email: "christopher.lee@company.com", phone: "+1234567904", department: "Finance", position: "Accountant", salary: 58000.0, hire_date: "2023-03-10", status: "active" },
    SampleEmployee { employee_id: "FIN003", first_name: "Michelle", last_name: "Thompson", email: "michelle.thompson@company.com", phone: "+1234567905", department: "Finance", position: "Finance Manager", salary: 92000.0, hire_date: "2021-11-08", status: "active" },
    // Operations
    SampleEmployee { employee_id: "OPS001", first_name: "Daniel", last_name: "Martinez", email: "daniel.martinez@company.com", phone: "+1234567906", department: "Operations", position: "Operations Coordinator", salary: 52000.0, hire_date: "2022-07-25", status: "active" },
    SampleEmployee { employee_id: "OPS002", first_name: "Laura", last_name: "Wilson", email: "laura.wilson@company.com", phone: "+1234567907", department: "Operations", position: "Supply Chain Analyst", salary: 61000.0, hire_date: "2023-01-05", status: "active" },
    // Customer Support
    SampleEmployee { employee_id: "SUP001", first_name: "Brian", last_name: "Moore", email: "brian.moore@company.com", phone: "+1234567908", department: "Customer Support", position: "Support Specialist", salary: 45000.0, hire_date: "2022-10-12", status: "active" },
    SampleEmployee { employee_id: "SUP002", first_name: "Jessica", last_name: "Taylor", email: "jessica.taylor@company.com", phone: "+1234567909", department: "Customer Support", position: "Senior Support Engineer", salary: 58000.0, hire_date: "2022-05-20", status: "active" },
    // Inactive records for variety
    SampleEmployee { employee_id: "EX001", first_name: "Mark", last_name: "Adams", email: "mark.adams@company.com", phone: "+1234567910", department: "Engineering", position: "Software Engineer", salary: 75000.0, hire_date: "2021-03-15", status: "inactive" },
    SampleEmployee { employee_id: "EX002", first_name: "Sophie", last_name: "Clark", email: "sophie.clark@company.com", phone: "+1234567911", department: "Marketing", position: "Marketing Coordinator", salary: 48000.0, hire_date: "2021-09-01", status: "inactive" },
];

const ADMIN_EMAIL: &str = "admin@company.com";
const ADMIN_PASSWORD: &str = "admin123";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://employees.db".to_string());

    let connect_options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    common::migrations::run_migrations(&pool).await?;

    // Admin account, created only if missing
    let admin_id: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(ADMIN_EMAIL)
        .fetch_optional(&pool)
        .await?;

    let admin_id = match admin_id {
        Some((id,)) => {
            info!(admin_id = %id, "Admin account already present");
            id
        }
        None => {
            let id = generate_user_id();
            let hashed = bcrypt::hash(ADMIN_PASSWORD, 10)?;
            sqlx::query(
                "INSERT INTO users (id, username, email, password, role) VALUES (?, ?, ?, ?, 'admin')",
            )
            .bind(&id)
            .bind("admin")
            .bind(ADMIN_EMAIL)
            .bind(&hashed)
            .execute(&pool)
            .await?;
            info!(admin_id = %id, email = ADMIN_EMAIL, "Admin account created");
            id
        }
    };

    let mut inserted = 0u32;
    for employee in SAMPLE_EMPLOYEES {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO employees (
                id, employee_id, first_name, last_name, email, phone,
                department, position, salary, hire_date, status, created_by
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(generate_employee_id())
        .bind(employee.employee_id)
        .bind(employee.first_name)
        .bind(employee.last_name)
        .bind(employee.email)
        .bind(employee.phone)
        .bind(employee.department)
        .bind(employee.position)
        .bind(employee.salary)
        .bind(employee.hire_date)
        .bind(employee.status)
        .bind(&admin_id)
        .execute(&pool)
        .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
            info!(
                employee_code = employee.employee_id,
                department = employee.department,
                "Added sample employee"
            );
        }
    }

    info!(
        inserted = inserted,
        skipped = SAMPLE_EMPLOYEES.len() as u32 - inserted,
        "Seeding complete"
    );
    println!("Seeded {} employees. Admin login: {} / {}", inserted, ADMIN_EMAIL, ADMIN_PASSWORD);

    Ok(())
}
