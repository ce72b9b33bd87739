//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Lookups of a missing record fail
//! with [`FirmyError::NotFound`](crate::error::FirmyError::NotFound); the
//! hierarchy validator relies on that to tell "absent" from "store down".

use uuid::Uuid;

use crate::error::FirmyResult;
use crate::models::{
    company::{Company, CreateCompany, UpdateCompany},
    department::{CreateDepartment, Department, UpdateDepartment},
    division::{CreateDivision, Division, UpdateDivision},
    employee::{CreateEmployee, Employee, UpdateEmployee},
    project::{CreateProject, Project, UpdateProject},
};

// ---------------------------------------------------------------------------
// Hierarchy
// ---------------------------------------------------------------------------

pub trait CompanyRepository: Send + Sync {
    fn create(&self, input: CreateCompany) -> impl Future<Output = FirmyResult<Company>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = FirmyResult<Company>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateCompany,
    ) -> impl Future<Output = FirmyResult<Company>> + Send;
    /// Removes the company with all its divisions, projects, departments
    /// and employees.
    fn delete(&self, id: Uuid) -> impl Future<Output = FirmyResult<()>> + Send;
    fn list(&self) -> impl Future<Output = FirmyResult<Vec<Company>>> + Send;
}

pub trait DivisionRepository: Send + Sync {
    fn create(&self, input: CreateDivision) -> impl Future<Output = FirmyResult<Division>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = FirmyResult<Division>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateDivision,
    ) -> impl Future<Output = FirmyResult<Division>> + Send;
    /// Removes the division with its projects and departments.
    fn delete(&self, id: Uuid) -> impl Future<Output = FirmyResult<()>> + Send;
    fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> impl Future<Output = FirmyResult<Vec<Division>>> + Send;
}

pub trait ProjectRepository: Send + Sync {
    fn create(&self, input: CreateProject) -> impl Future<Output = FirmyResult<Project>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = FirmyResult<Project>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateProject,
    ) -> impl Future<Output = FirmyResult<Project>> + Send;
    /// Removes the project with its departments.
    fn delete(&self, id: Uuid) -> impl Future<Output = FirmyResult<()>> + Send;
    fn list_by_division(
        &self,
        division_id: Uuid,
    ) -> impl Future<Output = FirmyResult<Vec<Project>>> + Send;
    /// All projects across every division of a company.
    fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> impl Future<Output = FirmyResult<Vec<Project>>> + Send;
}

pub trait DepartmentRepository: Send + Sync {
    fn create(
        &self,
        input: CreateDepartment,
    ) -> impl Future<Output = FirmyResult<Department>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = FirmyResult<Department>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateDepartment,
    ) -> impl Future<Output = FirmyResult<Department>> + Send;
    /// Removes the department. Its employees stay, unassigned.
    fn delete(&self, id: Uuid) -> impl Future<Output = FirmyResult<()>> + Send;
    fn list_by_project(
        &self,
        project_id: Uuid,
    ) -> impl Future<Output = FirmyResult<Vec<Department>>> + Send;
    /// All departments across every project of a company.
    fn list_by_company(
        &self,
        company_id: Uuid,
    ) -> impl Future<Output = FirmyResult<Vec<Department>>> + Send;
}

// ---------------------------------------------------------------------------
// Employees (company-scoped)
// ---------------------------------------------------------------------------

pub trait EmployeeRepository: Send + Sync {
    fn create(&self, input: CreateEmployee) -> impl Future<Output = FirmyResult<Employee>> + Send;
    /// Succeeds only when the employee exists *and* works for `company_id`.
    fn get_by_id(
        &self,
        company_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = FirmyResult<Employee>> + Send;
    fn update(
        &self,
        company_id: Uuid,
        id: Uuid,
        input: UpdateEmployee,
    ) -> impl Future<Output = FirmyResult<Employee>> + Send;
    /// Removes the employee and clears any leader reference to them.
    fn delete(&self, company_id: Uuid, id: Uuid) -> impl Future<Output = FirmyResult<()>> + Send;
    fn list(&self, company_id: Uuid) -> impl Future<Output = FirmyResult<Vec<Employee>>> + Send;
    fn list_by_department(
        &self,
        company_id: Uuid,
        department_id: Uuid,
    ) -> impl Future<Output = FirmyResult<Vec<Employee>>> + Send;
}

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

/// One handle to all five repositories.
///
/// The validator and the HTTP layer are generic over this instead of over
/// each repository separately.
pub trait Repositories: Clone + Send + Sync + 'static {
    type Companies: CompanyRepository;
    type Divisions: DivisionRepository;
    type Projects: ProjectRepository;
    type Departments: DepartmentRepository;
    type Employees: EmployeeRepository;

    fn companies(&self) -> &Self::Companies;
    fn divisions(&self) -> &Self::Divisions;
    fn projects(&self) -> &Self::Projects;
    fn departments(&self) -> &Self::Departments;
    fn employees(&self) -> &Self::Employees;
}
