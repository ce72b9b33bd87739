//! Employee handlers, nested under `/companies/:company_id/employees`.
//!
//! An employee is only reachable through the company that employs them;
//! any other company id answers 404 `EmployeeNotInCompany`.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use firmy_core::error::FirmyResult;
use firmy_core::models::employee::{Employee, UpdateEmployee};
use firmy_core::repository::{CompanyRepository, EmployeeRepository, Repositories};
use firmy_validation::EntityValidator;
use uuid::Uuid;

use super::{created, department_name};
use crate::dto::{CreateEmployeeRequest, EmployeeDto};
use crate::error::{ApiError, check_hierarchy};
use crate::state::AppState;

async fn to_dto<R: Repositories>(
    repos: &R,
    employee: Employee,
    company_name: String,
) -> FirmyResult<EmployeeDto> {
    let department = department_name(repos, employee.department_id).await?;
    Ok(EmployeeDto::new(employee, company_name, department))
}

pub(crate) async fn list<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    check_hierarchy(state.validator.validate_company(company_id).await?)?;

    let company = state.repos.companies().get_by_id(company_id).await?;
    let employees = state.repos.employees().list(company_id).await?;

    // Many employees share a department; look each one up once.
    let mut departments: HashMap<Uuid, Option<String>> = HashMap::new();
    let mut dtos = Vec::with_capacity(employees.len());
    for employee in employees {
        let department = match employee.department_id {
            Some(id) => match departments.get(&id) {
                Some(name) => name.clone(),
                None => {
                    let name = department_name(&state.repos, Some(id)).await?;
                    departments.insert(id, name.clone());
                    name
                }
            },
            None => None,
        };
        dtos.push(EmployeeDto::new(employee, company.name.clone(), department));
    }
    Ok(Json(dtos))
}

pub(crate) async fn get<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, employee_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<EmployeeDto>, ApiError> {
    check_hierarchy(state.validator.validate_company(company_id).await?)?;
    check_hierarchy(
        state
            .validator
            .validate_employee(employee_id, company_id)
            .await?,
    )?;

    let company = state.repos.companies().get_by_id(company_id).await?;
    let employee = state
        .repos
        .employees()
        .get_by_id(company_id, employee_id)
        .await?;
    Ok(Json(to_dto(&state.repos, employee, company.name).await?))
}

pub(crate) async fn create<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path(company_id): Path<Uuid>,
    Json(body): Json<CreateEmployeeRequest>,
) -> Result<Response, ApiError> {
    let input = body.into_create(company_id);
    input.validate()?;

    check_hierarchy(state.validator.validate_company(company_id).await?)?;

    let company = state.repos.companies().get_by_id(company_id).await?;
    let employee = state.repos.employees().create(input).await?;
    let location = format!("/api/companies/{company_id}/employees/{}", employee.id);
    let dto = to_dto(&state.repos, employee, company.name).await?;
    Ok(created(location, dto))
}

pub(crate) async fn update<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, employee_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateEmployee>,
) -> Result<StatusCode, ApiError> {
    let input = input.normalize();
    input.validate()?;

    check_hierarchy(state.validator.validate_company(company_id).await?)?;
    check_hierarchy(
        state
            .validator
            .validate_employee(employee_id, company_id)
            .await?,
    )?;

    state
        .repos
        .employees()
        .update(company_id, employee_id, input)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Also clears every leader reference to the employee.
pub(crate) async fn delete<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, employee_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    check_hierarchy(state.validator.validate_company(company_id).await?)?;
    check_hierarchy(
        state
            .validator
            .validate_employee(employee_id, company_id)
            .await?,
    )?;

    state
        .repos
        .employees()
        .delete(company_id, employee_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
