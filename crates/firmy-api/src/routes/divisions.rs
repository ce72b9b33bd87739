//! Division handlers, nested under `/companies/:company_id/divisions`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use firmy_core::models::division::UpdateDivision;
use firmy_core::repository::{DivisionRepository, Repositories};
use firmy_validation::EntityValidator;
use uuid::Uuid;

use super::{created, employee_names, leader_name, lookup_name};
use crate::dto::{CreateUnitRequest, DivisionDto};
use crate::error::{ApiError, check_hierarchy, check_leader};
use crate::state::AppState;

pub(crate) async fn list<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<DivisionDto>>, ApiError> {
    check_hierarchy(state.validator.validate_company(company_id).await?)?;

    let divisions = state.repos.divisions().list_by_company(company_id).await?;
    let names = employee_names(&state.repos, company_id).await?;
    Ok(Json(
        divisions
            .into_iter()
            .map(|d| {
                let leader = lookup_name(&names, d.leader_id);
                DivisionDto::new(d, leader)
            })
            .collect(),
    ))
}

pub(crate) async fn get<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<DivisionDto>, ApiError> {
    check_hierarchy(
        state
            .validator
            .validate_division(division_id, company_id)
            .await?,
    )?;

    let division = state.repos.divisions().get_by_id(division_id).await?;
    let leader = leader_name(&state.repos, company_id, division.leader_id).await?;
    Ok(Json(DivisionDto::new(division, leader)))
}

pub(crate) async fn create<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path(company_id): Path<Uuid>,
    Json(body): Json<CreateUnitRequest>,
) -> Result<Response, ApiError> {
    let input = body.into_division(company_id);
    input.validate()?;

    check_hierarchy(state.validator.validate_company(company_id).await?)?;
    check_leader(
        state
            .validator
            .validate_leader(input.leader_id, company_id)
            .await?,
    )?;

    let division = state.repos.divisions().create(input).await?;
    let leader = leader_name(&state.repos, company_id, division.leader_id).await?;
    let location = format!("/api/companies/{company_id}/divisions/{}", division.id);
    Ok(created(location, DivisionDto::new(division, leader)))
}

pub(crate) async fn update<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateDivision>,
) -> Result<StatusCode, ApiError> {
    let input = input.normalize();
    input.validate()?;

    check_hierarchy(
        state
            .validator
            .validate_division(division_id, company_id)
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

    state.repos.divisions().update(division_id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Removes the division together with its projects and departments.
pub(crate) async fn delete<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    check_hierarchy(
        state
            .validator
            .validate_division(division_id, company_id)
            .await?,
    )?;

    state.repos.divisions().delete(division_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
