//! SurrealDB implementation of [`ProjectRepository`].

use chrono::{DateTime, Utc};
use firmy_core::error::FirmyResult;
use firmy_core::models::project::{CreateProject, Project, UpdateProject};
use firmy_core::repository::ProjectRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::{parse_optional_uuid, parse_uuid};
use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct ProjectRow {
    division_id: String,
    name: String,
    code: String,
    leader_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectRow {
    fn into_project(self, id: Uuid) -> Result<Project, DbError> {
        Ok(Project {
            id,
            division_id: parse_uuid("division", &self.division_id)?,
            name: self.name,
            code: self.code,
            leader_id: parse_optional_uuid("leader", self.leader_id.as_deref())?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct ProjectRowWithId {
    record_id: String,
    division_id: String,
    name: String,
    code: String,
    leader_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectRowWithId {
    fn try_into_project(self) -> Result<Project, DbError> {
        let id = parse_uuid("project", &self.record_id)?;
        ProjectRow {
            division_id: self.division_id,
            name: self.name,
            code: self.code,
            leader_id: self.leader_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .into_project(id)
    }
}

/// SurrealDB implementation of the Project repository.
#[derive(Clone)]
pub struct SurrealProjectRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealProjectRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Select projects matching `filter`, which refers to the bound
    /// `$parent_id`.
    async fn list_where(&self, filter: &str, parent_id: Uuid) -> FirmyResult<Vec<Project>> {
        let query = format!(
            "SELECT meta::id(id) AS record_id, * FROM project {filter} \
             ORDER BY created_at ASC"
        );

        let mut result = self
            .db
            .query(query)
            .bind(("parent_id", parent_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProjectRowWithId> = result.take(0).map_err(DbError::from)?;

        rows.into_iter()
            .map(|row| row.try_into_project())
            .collect::<Result<Vec<_>, DbError>>()
            .map_err(Into::into)
    }
}

impl<C: Connection> ProjectRepository for SurrealProjectRepository<C> {
    async fn create(&self, input: CreateProject) -> FirmyResult<Project> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('project', $id) SET \
                 division_id = $division_id, \
                 name = $name, code = $code, \
                 leader_id = $leader_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("division_id", input.division_id.to_string()))
            .bind(("name", input.name))
            .bind(("code", input.code))
            .bind(("leader_id", input.leader_id.map(|l| l.to_string())))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<ProjectRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "project".into(),
            id: id_str,
        })?;

        Ok(row.into_project(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> FirmyResult<Project> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('project', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProjectRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "project".into(),
            id: id_str,
        })?;

        Ok(row.into_project(id)?)
    }

    async fn update(&self, id: Uuid, input: UpdateProject) -> FirmyResult<Project> {
        let id_str = id.to_string();

        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.code.is_some() {
            sets.push("code = $code");
        }
        if input.leader_id.is_some() {
            sets.push("leader_id = $leader_id");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('project', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id_str.clone()));

        if let Some(name) = input.name {
            builder = builder.bind(("name", name));
        }
        if let Some(code) = input.code {
            builder = builder.bind(("code", code));
        }
        if let Some(leader_id) = input.leader_id {
            builder = builder.bind(("leader_id", leader_id.to_string()));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<ProjectRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "project".into(),
            id: id_str,
        })?;

        Ok(row.into_project(id)?)
    }

    async fn delete(&self, id: Uuid) -> FirmyResult<()> {
        self.db
            .query(
                "LET $departments = (SELECT VALUE meta::id(id) FROM department \
                     WHERE project_id = $id); \
                 UPDATE employee SET department_id = NONE \
                     WHERE department_id IN $departments; \
                 DELETE department WHERE project_id = $id; \
                 DELETE type::record('project', $id);",
            )
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_by_division(&self, division_id: Uuid) -> FirmyResult<Vec<Project>> {
        self.list_where("WHERE division_id = $parent_id", division_id)
            .await
    }

    async fn list_by_company(&self, company_id: Uuid) -> FirmyResult<Vec<Project>> {
        self.list_where(
            "WHERE division_id IN (SELECT VALUE meta::id(id) FROM division \
                 WHERE company_id = $parent_id)",
            company_id,
        )
        .await
    }
}
