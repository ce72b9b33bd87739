//! SurrealDB implementation of [`DepartmentRepository`].

use chrono::{DateTime, Utc};
use firmy_core::error::FirmyResult;
use firmy_core::models::department::{CreateDepartment, Department, UpdateDepartment};
use firmy_core::repository::DepartmentRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::{parse_optional_uuid, parse_uuid};
use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct DepartmentRow {
    project_id: String,
    name: String,
    code: String,
    leader_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DepartmentRow {
    fn into_department(self, id: Uuid) -> Result<Department, DbError> {
        Ok(Department {
            id,
            project_id: parse_uuid("project", &self.project_id)?,
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
struct DepartmentRowWithId {
    record_id: String,
    project_id: String,
    name: String,
    code: String,
    leader_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DepartmentRowWithId {
    fn try_into_department(self) -> Result<Department, DbError> {
        let id = parse_uuid("department", &self.record_id)?;
        DepartmentRow {
            project_id: self.project_id,
            name: self.name,
            code: self.code,
            leader_id: self.leader_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .into_department(id)
    }
}

/// SurrealDB implementation of the Department repository.
#[derive(Clone)]
pub struct SurrealDepartmentRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealDepartmentRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Select departments matching `filter`, which refers to the bound
    /// `$parent_id`.
    async fn list_where(&self, filter: &str, parent_id: Uuid) -> FirmyResult<Vec<Department>> {
        let query = format!(
            "SELECT meta::id(id) AS record_id, * FROM department {filter} \
             ORDER BY created_at ASC"
        );

        let mut result = self
            .db
            .query(query)
            .bind(("parent_id", parent_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<DepartmentRowWithId> = result.take(0).map_err(DbError::from)?;

        rows.into_iter()
            .map(|row| row.try_into_department())
            .collect::<Result<Vec<_>, DbError>>()
            .map_err(Into::into)
    }
}

impl<C: Connection> DepartmentRepository for SurrealDepartmentRepository<C> {
    async fn create(&self, input: CreateDepartment) -> FirmyResult<Department> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('department', $id) SET \
                 project_id = $project_id, \
                 name = $name, code = $code, \
                 leader_id = $leader_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("project_id", input.project_id.to_string()))
            .bind(("name", input.name))
            .bind(("code", input.code))
            .bind(("leader_id", input.leader_id.map(|l| l.to_string())))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<DepartmentRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "department".into(),
            id: id_str,
        })?;

        Ok(row.into_department(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> FirmyResult<Department> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('department', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<DepartmentRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "department".into(),
            id: id_str,
        })?;

        Ok(row.into_department(id)?)
    }

    async fn update(&self, id: Uuid, input: UpdateDepartment) -> FirmyResult<Department> {
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
            "UPDATE type::record('department', $id) SET {}",
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

        let rows: Vec<DepartmentRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "department".into(),
            id: id_str,
        })?;

        Ok(row.into_department(id)?)
    }

    async fn delete(&self, id: Uuid) -> FirmyResult<()> {
        // Employees stay in the company, just without a department.
        self.db
            .query(
                "UPDATE employee SET department_id = NONE \
                     WHERE department_id = $id; \
                 DELETE type::record('department', $id);",
            )
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_by_project(&self, project_id: Uuid) -> FirmyResult<Vec<Department>> {
        self.list_where("WHERE project_id = $parent_id", project_id)
            .await
    }

    async fn list_by_company(&self, company_id: Uuid) -> FirmyResult<Vec<Department>> {
        self.list_where(
            "WHERE project_id IN (SELECT VALUE meta::id(id) FROM project \
                 WHERE division_id IN (SELECT VALUE meta::id(id) FROM division \
                     WHERE company_id = $parent_id))",
            company_id,
        )
        .await
    }
}
