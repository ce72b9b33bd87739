//! Schema definitions for SurrealDB.
//!
//! All tables use SCHEMAFULL mode. UUIDs are stored as strings; parent
//! links are plain `*_id` fields so that the hierarchy can be checked with
//! point lookups. Every statement is `IF NOT EXISTS`, so initialization
//! can run on every startup.

use surrealdb::{Connection, Surreal};
use tracing::info;

use crate::error::DbError;

const SCHEMA: &str = "\
-- =======================================================================
-- Companies (root of the hierarchy)
-- =======================================================================
DEFINE TABLE IF NOT EXISTS company SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS name ON TABLE company TYPE string;
DEFINE FIELD IF NOT EXISTS code ON TABLE company TYPE string;
DEFINE FIELD IF NOT EXISTS leader_id ON TABLE company TYPE option<string>;
DEFINE FIELD IF NOT EXISTS created_at ON TABLE company TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD IF NOT EXISTS updated_at ON TABLE company TYPE datetime \
    DEFAULT time::now();

-- =======================================================================
-- Divisions (company scope)
-- =======================================================================
DEFINE TABLE IF NOT EXISTS division SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS company_id ON TABLE division TYPE string;
DEFINE FIELD IF NOT EXISTS name ON TABLE division TYPE string;
DEFINE FIELD IF NOT EXISTS code ON TABLE division TYPE string;
DEFINE FIELD IF NOT EXISTS leader_id ON TABLE division TYPE option<string>;
DEFINE FIELD IF NOT EXISTS created_at ON TABLE division TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD IF NOT EXISTS updated_at ON TABLE division TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_division_company ON TABLE division \
    COLUMNS company_id;

-- =======================================================================
-- Projects (division scope)
-- =======================================================================
DEFINE TABLE IF NOT EXISTS project SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS division_id ON TABLE project TYPE string;
DEFINE FIELD IF NOT EXISTS name ON TABLE project TYPE string;
DEFINE FIELD IF NOT EXISTS code ON TABLE project TYPE string;
DEFINE FIELD IF NOT EXISTS leader_id ON TABLE project TYPE option<string>;
DEFINE FIELD IF NOT EXISTS created_at ON TABLE project TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD IF NOT EXISTS updated_at ON TABLE project TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_project_division ON TABLE project \
    COLUMNS division_id;

-- =======================================================================
-- Departments (project scope)
-- =======================================================================
DEFINE TABLE IF NOT EXISTS department SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS project_id ON TABLE department TYPE string;
DEFINE FIELD IF NOT EXISTS name ON TABLE department TYPE string;
DEFINE FIELD IF NOT EXISTS code ON TABLE department TYPE string;
DEFINE FIELD IF NOT EXISTS leader_id ON TABLE department \
    TYPE option<string>;
DEFINE FIELD IF NOT EXISTS created_at ON TABLE department TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD IF NOT EXISTS updated_at ON TABLE department TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_department_project ON TABLE department \
    COLUMNS project_id;

-- =======================================================================
-- Employees (company scope, optional department)
-- =======================================================================
DEFINE TABLE IF NOT EXISTS employee SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS company_id ON TABLE employee TYPE string;
DEFINE FIELD IF NOT EXISTS department_id ON TABLE employee \
    TYPE option<string>;
DEFINE FIELD IF NOT EXISTS title ON TABLE employee TYPE option<string>;
DEFINE FIELD IF NOT EXISTS first_name ON TABLE employee TYPE string;
DEFINE FIELD IF NOT EXISTS last_name ON TABLE employee TYPE string;
DEFINE FIELD IF NOT EXISTS phone ON TABLE employee TYPE option<string>;
DEFINE FIELD IF NOT EXISTS email ON TABLE employee TYPE string;
DEFINE FIELD IF NOT EXISTS created_at ON TABLE employee TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD IF NOT EXISTS updated_at ON TABLE employee TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_employee_company ON TABLE employee \
    COLUMNS company_id;
DEFINE INDEX IF NOT EXISTS idx_employee_department ON TABLE employee \
    COLUMNS company_id, department_id;
";

/// Define all tables, fields and indexes on the given SurrealDB client.
pub async fn init_schema<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    info!("Initializing schema");

    db.query(SCHEMA)
        .await?
        .check()
        .map_err(|e| DbError::Schema(e.to_string()))?;

    info!("Schema initialized");
    Ok(())
}

/// Returns the raw schema DDL.
pub fn schema_ddl() -> &'static str {
    SCHEMA
}
