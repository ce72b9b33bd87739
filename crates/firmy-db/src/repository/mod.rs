//! SurrealDB repository implementations.

mod company;
mod department;
mod division;
mod employee;
mod project;

pub use company::SurrealCompanyRepository;
pub use department::SurrealDepartmentRepository;
pub use division::SurrealDivisionRepository;
pub use employee::SurrealEmployeeRepository;
pub use project::SurrealProjectRepository;

use firmy_core::repository::Repositories;
use surrealdb::{Connection, Surreal};
use uuid::Uuid;

use crate::error::DbError;

/// Parse a UUID stored as a string field.
fn parse_uuid(field: &str, value: &str) -> Result<Uuid, DbError> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode(format!("invalid {field} UUID: {e}")))
}

fn parse_optional_uuid(field: &str, value: Option<&str>) -> Result<Option<Uuid>, DbError> {
    value.map(|v| parse_uuid(field, v)).transpose()
}

/// All SurrealDB repositories sharing one client.
#[derive(Clone)]
pub struct SurrealRepositories<C: Connection> {
    companies: SurrealCompanyRepository<C>,
    divisions: SurrealDivisionRepository<C>,
    projects: SurrealProjectRepository<C>,
    departments: SurrealDepartmentRepository<C>,
    employees: SurrealEmployeeRepository<C>,
}

impl<C: Connection> SurrealRepositories<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self {
            companies: SurrealCompanyRepository::new(db.clone()),
            divisions: SurrealDivisionRepository::new(db.clone()),
            projects: SurrealProjectRepository::new(db.clone()),
            departments: SurrealDepartmentRepository::new(db.clone()),
            employees: SurrealEmployeeRepository::new(db),
        }
    }
}

impl<C: Connection + Clone> Repositories for SurrealRepositories<C> {
    type Companies = SurrealCompanyRepository<C>;
    type Divisions = SurrealDivisionRepository<C>;
    type Projects = SurrealProjectRepository<C>;
    type Departments = SurrealDepartmentRepository<C>;
    type Employees = SurrealEmployeeRepository<C>;

    fn companies(&self) -> &Self::Companies {
        &self.companies
    }

    fn divisions(&self) -> &Self::Divisions {
        &self.divisions
    }

    fn projects(&self) -> &Self::Projects {
        &self.projects
    }

    fn departments(&self) -> &Self::Departments {
        &self.departments
    }

    fn employees(&self) -> &Self::Employees {
        &self.employees
    }
}
