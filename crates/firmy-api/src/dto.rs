//! Request and response bodies.
//!
//! Responses flatten the leader into `leader_name` so clients do not need a
//! second call. Create requests omit the parent id, which comes from the
//! path.

use firmy_core::models::company::Company;
use firmy_core::models::department::{CreateDepartment, Department};
use firmy_core::models::division::{CreateDivision, Division};
use firmy_core::models::employee::{CreateEmployee, Employee};
use firmy_core::models::project::{CreateProject, Project};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub leader_id: Option<Uuid>,
    pub leader_name: Option<String>,
}

impl CompanyDto {
    pub fn new(company: Company, leader_name: Option<String>) -> Self {
        Self {
            id: company.id,
            name: company.name,
            code: company.code,
            leader_id: company.leader_id,
            leader_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub company_id: Uuid,
    pub leader_id: Option<Uuid>,
    pub leader_name: Option<String>,
}

impl DivisionDto {
    pub fn new(division: Division, leader_name: Option<String>) -> Self {
        Self {
            id: division.id,
            name: division.name,
            code: division.code,
            company_id: division.company_id,
            leader_id: division.leader_id,
            leader_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub division_id: Uuid,
    pub leader_id: Option<Uuid>,
    pub leader_name: Option<String>,
}

impl ProjectDto {
    pub fn new(project: Project, leader_name: Option<String>) -> Self {
        Self {
            id: project.id,
            name: project.name,
            code: project.code,
            division_id: project.division_id,
            leader_id: project.leader_id,
            leader_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub project_id: Uuid,
    pub leader_id: Option<Uuid>,
    pub leader_name: Option<String>,
}

impl DepartmentDto {
    pub fn new(department: Department, leader_name: Option<String>) -> Self {
        Self {
            id: department.id,
            name: department.name,
            code: department.code,
            project_id: department.project_id,
            leader_id: department.leader_id,
            leader_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub company_id: Uuid,
    pub company_name: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
}

impl EmployeeDto {
    pub fn new(employee: Employee, company_name: String, department_name: Option<String>) -> Self {
        Self {
            id: employee.id,
            title: employee.title,
            first_name: employee.first_name,
            last_name: employee.last_name,
            phone: employee.phone,
            email: employee.email,
            company_id: employee.company_id,
            company_name,
            department_id: employee.department_id,
            department_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ---------------------------------------------------------------------------
// Create requests
// ---------------------------------------------------------------------------

/// Body for creating a division, project or department.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnitRequest {
    pub name: String,
    pub code: String,
    pub leader_id: Option<Uuid>,
}

impl CreateUnitRequest {
    pub fn into_division(self, company_id: Uuid) -> CreateDivision {
        CreateDivision {
            company_id,
            name: self.name,
            code: self.code,
            leader_id: self.leader_id,
        }
    }

    pub fn into_project(self, division_id: Uuid) -> CreateProject {
        CreateProject {
            division_id,
            name: self.name,
            code: self.code,
            leader_id: self.leader_id,
        }
    }

    pub fn into_department(self, project_id: Uuid) -> CreateDepartment {
        CreateDepartment {
            project_id,
            name: self.name,
            code: self.code,
            leader_id: self.leader_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub department_id: Option<Uuid>,
}

impl CreateEmployeeRequest {
    pub fn into_create(self, company_id: Uuid) -> CreateEmployee {
        CreateEmployee {
            company_id,
            department_id: self.department_id,
            title: self.title,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_request_carries_parent_from_path() {
        let body: CreateUnitRequest =
            serde_json::from_str(r#"{"name":"Engineering","code":"ENG"}"#).unwrap();
        assert_eq!(body.leader_id, None);

        let parent = Uuid::new_v4();
        let division = body.clone().into_division(parent);
        assert_eq!(division.company_id, parent);
        assert_eq!(division.name, "Engineering");
        assert_eq!(body.into_department(parent).project_id, parent);
    }

    #[test]
    fn employee_request_defaults_optional_fields() {
        let body: CreateEmployeeRequest = serde_json::from_str(
            r#"{"first_name":"Jana","last_name":"Nova","email":"jana@acme.example"}"#,
        )
        .unwrap();
        let company = Uuid::new_v4();
        let create = body.into_create(company);
        assert_eq!(create.company_id, company);
        assert!(create.title.is_none());
        assert!(create.department_id.is_none());
    }
}
