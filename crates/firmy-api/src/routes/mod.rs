//! Route table and helpers shared by the handlers.

mod companies;
mod departments;
mod divisions;
mod employees;
mod health;
mod projects;

use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use firmy_core::error::{FirmyResult, OptionalExt};
use firmy_core::repository::{DepartmentRepository, EmployeeRepository, Repositories};
use firmy_validation::EntityValidator;
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;

const DIVISION: &str = "/companies/:company_id/divisions/:division_id";
const PROJECT: &str = "/companies/:company_id/divisions/:division_id/projects/:project_id";
const DEPARTMENT: &str = "/companies/:company_id/divisions/:division_id/projects/:project_id\
                          /departments/:department_id";

pub(crate) fn api<R, V>() -> Router<AppState<R, V>>
where
    R: Repositories,
    V: EntityValidator + 'static,
{
    Router::new()
        .route("/health", get(health::health))
        // Companies
        .route(
            "/companies",
            get(companies::list::<R, V>).post(companies::create::<R, V>),
        )
        .route(
            "/companies/:company_id",
            get(companies::get::<R, V>)
                .put(companies::update::<R, V>)
                .delete(companies::delete::<R, V>),
        )
        .route(
            "/companies/:company_id/projects",
            get(companies::projects::<R, V>),
        )
        .route(
            "/companies/:company_id/departments",
            get(companies::departments::<R, V>),
        )
        // Divisions
        .route(
            "/companies/:company_id/divisions",
            get(divisions::list::<R, V>).post(divisions::create::<R, V>),
        )
        .route(
            DIVISION,
            get(divisions::get::<R, V>)
                .put(divisions::update::<R, V>)
                .delete(divisions::delete::<R, V>),
        )
        // Projects
        .route(
            &format!("{DIVISION}/projects"),
            get(projects::list::<R, V>).post(projects::create::<R, V>),
        )
        .route(
            PROJECT,
            get(projects::get::<R, V>)
                .put(projects::update::<R, V>)
                .delete(projects::delete::<R, V>),
        )
        // Departments
        .route(
            &format!("{PROJECT}/departments"),
            get(departments::list::<R, V>).post(departments::create::<R, V>),
        )
        .route(
            DEPARTMENT,
            get(departments::get::<R, V>)
                .put(departments::update::<R, V>)
                .delete(departments::delete::<R, V>),
        )
        .route(
            &format!("{DEPARTMENT}/employees"),
            get(departments::employees::<R, V>),
        )
        // Employees
        .route(
            "/companies/:company_id/employees",
            get(employees::list::<R, V>).post(employees::create::<R, V>),
        )
        .route(
            "/companies/:company_id/employees/:employee_id",
            get(employees::get::<R, V>)
                .put(employees::update::<R, V>)
                .delete(employees::delete::<R, V>),
        )
}

/// 201 with a `Location` header pointing at the new resource.
fn created<T: Serialize>(location: String, body: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
}

/// Full names of a company's employees, keyed by id.
async fn employee_names<R: Repositories>(
    repos: &R,
    company_id: Uuid,
) -> FirmyResult<HashMap<Uuid, String>> {
    let employees = repos.employees().list(company_id).await?;
    Ok(employees
        .into_iter()
        .map(|e| (e.id, e.full_name()))
        .collect())
}

/// Full name of a single leader, if set and still employed by the company.
async fn leader_name<R: Repositories>(
    repos: &R,
    company_id: Uuid,
    leader_id: Option<Uuid>,
) -> FirmyResult<Option<String>> {
    let Some(leader_id) = leader_id else {
        return Ok(None);
    };
    let leader = repos
        .employees()
        .get_by_id(company_id, leader_id)
        .await
        .optional()?;
    Ok(leader.map(|e| e.full_name()))
}

fn lookup_name(names: &HashMap<Uuid, String>, id: Option<Uuid>) -> Option<String> {
    id.and_then(|id| names.get(&id).cloned())
}

async fn department_name<R: Repositories>(
    repos: &R,
    department_id: Option<Uuid>,
) -> FirmyResult<Option<String>> {
    let Some(department_id) = department_id else {
        return Ok(None);
    };
    let department = repos
        .departments()
        .get_by_id(department_id)
        .await
        .optional()?;
    Ok(department.map(|d| d.name))
}
