// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use tracing::info;

/// Run all database migrations. Tables are created if they don't exist;
/// existing data is preserved across restarts.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    create_user_tables(pool).await?;
    create_employee_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed successfully");

    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT UNIQUE NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'user',
            google_id TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Users table ready");
    Ok(())
}

async fn create_employee_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id TEXT PRIMARY KEY,
            employee_id TEXT UNIQUE NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            phone TEXT,
            department TEXT,
            position TEXT,
            salary REAL,
            hire_date TEXT,
            status TEXT NOT NULL DEFAULT 'active',
            address TEXT,
            emergency_contact_name TEXT,
            emergency_contact_phone TEXT,
            created_by TEXT REFERENCES users(id),
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Employees table ready");
    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department)",
        "CREATE INDEX IF NOT EXISTS idx_employees_status ON employees(status)",
        "CREATE INDEX IF NOT EXISTS idx_employees_hire_date ON employees(hire_date)",
        "CREATE INDEX IF NOT EXISTS idx_employees_created_at ON employees(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Indexes ready");
    Ok(())
}
