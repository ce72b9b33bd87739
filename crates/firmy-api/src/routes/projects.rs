//! Project handlers, nested under
//! `/companies/:company_id/divisions/:division_id/projects`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use firmy_core::models::project::UpdateProject;
use firmy_core::repository::{ProjectRepository, Repositories};
use firmy_validation::EntityValidator;
use uuid::Uuid;

use super::{created, employee_names, leader_name, lookup_name};
use crate::dto::{CreateUnitRequest, ProjectDto};
use crate::error::{ApiError, check_hierarchy, check_leader};
use crate::state::AppState;

pub(crate) async fn list<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<ProjectDto>>, ApiError> {
    check_hierarchy(
        state
            .validator
            .validate_division(division_id, company_id)
            .await?,
    )?;

    let projects = state.repos.projects().list_by_division(division_id).await?;
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

pub(crate) async fn get<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id, project_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<ProjectDto>, ApiError> {
    check_hierarchy(
        state
            .validator
            .validate_project(project_id, division_id, company_id)
            .await?,
    )?;

    let project = state.repos.projects().get_by_id(project_id).await?;
    let leader = leader_name(&state.repos, company_id, project.leader_id).await?;
    Ok(Json(ProjectDto::new(project, leader)))
}

pub(crate) async fn create<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<CreateUnitRequest>,
) -> Result<Response, ApiError> {
    let input = body.into_project(division_id);
    input.validate()?;

    check_hierarchy(
        state
            .validator
            .validate_division(division_id, company_id)
            .await?,
    )?;
    check_leader(
        state
            .validator
            .validate_leader(input.leader_id, company_id)
            .await?,
    )?;

    let project = state.repos.projects().create(input).await?;
    let leader = leader_name(&state.repos, company_id, project.leader_id).await?;
    let location = format!(
        "/api/companies/{company_id}/divisions/{division_id}/projects/{}",
        project.id
    );
    Ok(created(location, ProjectDto::new(project, leader)))
}

pub(crate) async fn update<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id, project_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(input): Json<UpdateProject>,
) -> Result<StatusCode, ApiError> {
    let input = input.normalize();
    input.validate()?;

    check_hierarchy(
        state
            .validator
            .validate_project(project_id, division_id, company_id)
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

    state.repos.projects().update(project_id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn delete<R: Repositories, V: EntityValidator>(
    State(state): State<AppState<R, V>>,
    Path((company_id, division_id, project_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    check_hierarchy(
        state
            .validator
            .validate_project(project_id, division_id, company_id)
            .await?,
    )?;

    state.repos.projects().delete(project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
