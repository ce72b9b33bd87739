//! Company handlers.
//!
//! GET    /companies
//! POST   /companies
//! GET    /companies/:company_id
//! PUT    /companies/:company_id
//! DELETE /companies/:company_id
//! GET    /companies/:company_id/projects
//! GET    /companies/:company_id/departments

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use firmy_core::models::company::{CreateCompany, UpdateCompany};
use firmy_core::repository::{
    CompanyRepository, DepartmentRepository, ProjectRepository, Repositories,
};
use firmy_validation::{EntityValidator, ValidationResult};
use uuid::Uuid;

use super::{created, employee_names, leader_name, lookup_name};
use crate::dto::{CompanyDto, DepartmentDto, ProjectDto};
use crate::error::{ApiError, check_hierarchy, check_leader};
use crate::state::AppState;

pub(crate) async fn list<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
) -> Result<Json<Vec<CompanyDto>>, ApiError> {
    let companies = state.repos.companies().list().await?;

    let mut dtos = Vec::with_capacity(companies.len());
    for company in companies {
        let leader = leader_name(&state.repos, company.id, company.leader_id).await?;
        dtos.push(CompanyDto::new(company, leader));
    }
    Ok(Json(dtos))
}

pub(crate) async fn get<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<CompanyDto>, ApiError> {
    check_hierarchy(state.validator.validate_company(company_id).await?)?;

    let company = state.repos.companies().get_by_id(company_id).await?;
    let leader = leader_name(&state.repos, company_id, company.leader_id).await?;
    Ok(Json(CompanyDto::new(company, leader)))
}

/// A brand-new company has no employees, so any proposed leader is invalid.
pub(crate) async fn create<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Json(input): Json<CreateCompany>,
) -> Result<Response, ApiError> {
    input.validate()?;
    if input.leader_id.is_some() {
        return Err(ApiError::Leader(ValidationResult::InvalidLeader));
    }

    let company = state.repos.companies().create(input).await?;
    let location = format!("/api/companies/{}", company.id);
    Ok(created(location, CompanyDto::new(company, None)))
}

pub(crate) async fn update<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path(company_id): Path<Uuid>,
    Json(input): Json<UpdateCompany>,
) -> Result<StatusCode, ApiError> {
    let input = input.normalize();
    input.validate()?;

    check_hierarchy(state.validator.validate_company(company_id).await?)?;
    if input.leader_id.is_some() {
        check_leader(
            state
                .validator
                .validate_leader(input.leader_id, company_id)
                .await?,
        )?;
    }

    state.repos.companies().update(company_id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn delete<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path(company_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    check_hierarchy(state.validator.validate_company(company_id).await?)?;

    state.repos.companies().delete(company_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Every project of every division in the company.
pub(crate) async fn projects<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<ProjectDto>>, ApiError> {
    check_hierarchy(state.validator.validate_company(company_id).await?)?;

    let projects = state.repos.projects().list_by_company(company_id).await?;
    let names = employee_names(&state.repos, company_id).await?;
    Ok(Json(
        projects
            .into_iter()
            .map(|p| {
                let leader = lookup_name(&names, p.leader_id);
                ProjectDto::new(p, leader)
            })
            .collect(),
    ))
}

/// Every department of every project in the company.
pub(crate) async fn departments<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<DepartmentDto>>, ApiError> {
    check_hierarchy(state.validator.validate_company(company_id).await?)?;

    let departments = state
        .repos
        .departments()
        .list_by_company(company_id)
        .await?;
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
