//! Hierarchy validator.
//!
//! Each check walks from the entity it is given up towards the company:
//! own existence first, then the stored parent link, then the parent's own
//! check. The first failure wins. Nothing is cached; every call re-reads
//! the store.

use firmy_core::error::{FirmyResult, OptionalExt};
use firmy_core::repository::{
    CompanyRepository, DepartmentRepository, DivisionRepository, EmployeeRepository,
    ProjectRepository, Repositories,
};
use tracing::debug;
use uuid::Uuid;

use crate::outcome::ValidationResult;

/// Checks id chains against the organizational hierarchy.
///
/// Domain failures come back as `Ok` with a non-success outcome. `Err` is
/// reserved for the store itself failing.
pub trait EntityValidator: Send + Sync {
    fn validate_company(
        &self,
        company_id: Uuid,
    ) -> impl Future<Output = FirmyResult<ValidationResult>> + Send;

    /// Does not check that the company itself exists.
    fn validate_division(
        &self,
        division_id: Uuid,
        company_id: Uuid,
    ) -> impl Future<Output = FirmyResult<ValidationResult>> + Send;

    fn validate_project(
        &self,
        project_id: Uuid,
        division_id: Uuid,
        company_id: Uuid,
    ) -> impl Future<Output = FirmyResult<ValidationResult>> + Send;

    fn validate_department(
        &self,
        department_id: Uuid,
        project_id: Uuid,
        division_id: Uuid,
        company_id: Uuid,
    ) -> impl Future<Output = FirmyResult<ValidationResult>> + Send;

    /// A missing employee and one working for another company are both
    /// reported as [`ValidationResult::EmployeeNotInCompany`].
    fn validate_employee(
        &self,
        employee_id: Uuid,
        company_id: Uuid,
    ) -> impl Future<Output = FirmyResult<ValidationResult>> + Send;

    /// An absent leader is always valid.
    fn validate_leader(
        &self,
        leader_id: Option<Uuid>,
        company_id: Uuid,
    ) -> impl Future<Output = FirmyResult<ValidationResult>> + Send;
}

/// [`EntityValidator`] backed by the repositories.
#[derive(Clone)]
pub struct RepositoryEntityValidator<R: Repositories> {
    repos: R,
}

impl<R: Repositories> RepositoryEntityValidator<R> {
    pub fn new(repos: R) -> Self {
        Self { repos }
    }
}

impl<R: Repositories> EntityValidator for RepositoryEntityValidator<R> {
    async fn validate_company(&self, company_id: Uuid) -> FirmyResult<ValidationResult> {
        if self.repos.companies().get_by_id(company_id).await.optional()?.is_none() {
            debug!(%company_id, "company not found");
            return Ok(ValidationResult::CompanyNotFound);
        }
        Ok(ValidationResult::Success)
    }

    async fn validate_division(
        &self,
        division_id: Uuid,
        company_id: Uuid,
    ) -> FirmyResult<ValidationResult> {
        let Some(division) = self
            .repos
            .divisions()
            .get_by_id(division_id)
            .await
            .optional()?
        else {
            debug!(%division_id, "division not found");
            return Ok(ValidationResult::DivisionNotFound);
        };
        if division.company_id != company_id {
            debug!(
                %division_id,
                expected = %company_id,
                actual = %division.company_id,
                "division belongs to another company"
            );
            return Ok(ValidationResult::DivisionNotInCompany);
        }
        Ok(ValidationResult::Success)
    }

    async fn validate_project(
        &self,
        project_id: Uuid,
        division_id: Uuid,
        company_id: Uuid,
    ) -> FirmyResult<ValidationResult> {
        let Some(project) = self
            .repos
            .projects()
            .get_by_id(project_id)
            .await
            .optional()?
        else {
            debug!(%project_id, "project not found");
            return Ok(ValidationResult::ProjectNotFound);
        };
        if project.division_id != division_id {
            debug!(
                %project_id,
                expected = %division_id,
                actual = %project.division_id,
                "project belongs to another division"
            );
            return Ok(ValidationResult::ProjectNotInDivision);
        }
        self.validate_division(division_id, company_id).await
    }

    async fn validate_department(
        &self,
        department_id: Uuid,
        project_id: Uuid,
        division_id: Uuid,
        company_id: Uuid,
    ) -> FirmyResult<ValidationResult> {
        let Some(department) =
            self.repos.departments().get_by_id(department_id).await.optional()?
        else {
            debug!(%department_id, "department not found");
            return Ok(ValidationResult::DepartmentNotFound);
        };
        if department.project_id != project_id {
            debug!(
                %department_id,
                expected = %project_id,
                actual = %department.project_id,
                "department belongs to another project"
            );
            return Ok(ValidationResult::DepartmentNotInProject);
        }
        self.validate_project(project_id, division_id, company_id).await
    }

    async fn validate_employee(
        &self,
        employee_id: Uuid,
        company_id: Uuid,
    ) -> FirmyResult<ValidationResult> {
        let lookup = self.repos.employees().get_by_id(company_id, employee_id).await;
        if lookup.optional()?.is_none() {
            debug!(%employee_id, %company_id, "employee not in company");
            return Ok(ValidationResult::EmployeeNotInCompany);
        }
        Ok(ValidationResult::Success)
    }

    async fn validate_leader(
        &self,
        leader_id: Option<Uuid>,
        company_id: Uuid,
    ) -> FirmyResult<ValidationResult> {
        let Some(leader_id) = leader_id else {
            return Ok(ValidationResult::Success);
        };
        match self.validate_employee(leader_id, company_id).await? {
            ValidationResult::Success => Ok(ValidationResult::Success),
            _ => {
                debug!(%leader_id, %company_id, "invalid leader");
                Ok(ValidationResult::InvalidLeader)
            }
        }
    }
}
