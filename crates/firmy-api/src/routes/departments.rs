//! Department handlers, nested under
//! `/companies/:company_id/divisions/:division_id/projects/:project_id/departments`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use firmy_core::models::department::UpdateDepartment;
use firmy_core::repository::{
    CompanyRepository, DepartmentRepository, EmployeeRepository, Repositories,
};
use firmy_validation::EntityValidator;
use uuid::Uuid;

use super::{created, employee_names, leader_name, lookup_name};
use crate::dto::{CreateUnitRequest, DepartmentDto, EmployeeDto};
use crate::error::{ApiError, check_hierarchy, check_leader};
use crate::state::AppState;

/// Path ids from the company down to a department.
type DepartmentPath = (Uuid, Uuid, Uuid, Uuid);

pub(crate) async fn list<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id, project_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<Vec<DepartmentDto>>, ApiError> {
    check_hierarchy(
        state
            .validator
            .validate_project(project_id, division_id, company_id)
            .await?,
    )?;

    let departments = state.repos.departments().list_by_project(project_id).await?;
    let names = employee_names(&state.repos, company_id).await?;
    Ok(Json(
        departments
            .into_iter()
            .map(|d| {
                let leader = lookup_name(&names, d.leader_id);
                DepartmentDto::new(d, leader)
            })
            .collect(),
    ))
}

pub(crate) async fn get<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id, project_id, department_id)): Path<DepartmentPath>,
) -> Result<Json<DepartmentDto>, ApiError> {
    check_hierarchy(
        state
            .validator
            .validate_department(department_id, project_id, division_id, company_id)
            .await?,
    )?;

    let department = state.repos.departments().get_by_id(department_id).await?;
    let leader = leader_name(&state.repos, company_id, department.leader_id).await?;
    Ok(Json(DepartmentDto::new(department, leader)))
}

pub(crate) async fn create<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id, project_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(body): Json<CreateUnitRequest>,
) -> Result<Response, ApiError> {
    let input = body.into_department(project_id);
    input.validate()?;

    check_hierarchy(
        state
            .validator
            .validate_project(project_id, division_id, company_id)
            .await?,
    )?;
    check_leader(
        state
            .validator
            .validate_leader(input.leader_id, company_id)
            .await?,
    )?;

    let department = state.repos.departments().create(input).await?;
    let leader = leader_name(&state.repos, company_id, department.leader_id).await?;
    let location = format!(
        "/api/companies/{company_id}/divisions/{division_id}/projects/{project_id}\
         /departments/{}",
        department.id
    );
    Ok(created(location, DepartmentDto::new(department, leader)))
}

pub(crate) async fn update<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id, project_id, department_id)): Path<DepartmentPath>,
    Json(input): Json<UpdateDepartment>,
) -> Result<StatusCode, ApiError> {
    let input = input.normalize();
    input.validate()?;

    check_hierarchy(
        state
            .validator
            .validate_department(department_id, project_id, division_id, company_id)
            .await?,
    )?;
    if input.leader_id.is_some() {
        check_leader(
            state
                .validator
                .validate_leader(input.leader_id, company_id)
                .await?,
        )?;
    }

    state.repos.departments().update(department_id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The department's employees stay, with no department.
pub(crate) async fn delete<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id, project_id, department_id)): Path<DepartmentPath>,
) -> Result<StatusCode, ApiError> {
    check_hierarchy(
        state
            .validator
            .validate_department(department_id, project_id, division_id, company_id)
            .await?,
    )?;

    state.repos.departments().delete(department_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Employees of the company assigned to this department.
pub(crate) async fn employees<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id, project_id, department_id)): Path<DepartmentPath>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    check_hierarchy(
        state
            .validator
            .validate_department(department_id, project_id, division_id, company_id)
            .await?,
    )?;

    let company = state.repos.companies().get_by_id(company_id).await?;
    let department = state.repos.departments().get_by_id(department_id).await?;
    let employees = state
        .repos
        .employees()
        .list_by_department(company_id, department_id)
        .await?;

    Ok(Json(
        employees
            .into_iter()
            .map(|e| EmployeeDto::new(e, company.name.clone(), Some(department.name.clone())))
            .collect(),
    ))
}
