//! SurrealDB implementation of [`CompanyRepository`].

use chrono::{DateTime, Utc};
use firmy_core::error::FirmyResult;
use firmy_core::models::company::{Company, CreateCompany, UpdateCompany};
use firmy_core::repository::CompanyRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::{parse_optional_uuid, parse_uuid};
use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct CompanyRow {
    name: String,
    code: String,
    leader_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CompanyRow {
    fn into_company(self, id: Uuid) -> Result<Company, DbError> {
        Ok(Company {
            id,
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
struct CompanyRowWithId {
    record_id: String,
    name: String,
    code: String,
    leader_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CompanyRowWithId {
    fn try_into_company(self) -> Result<Company, DbError> {
        let id = parse_uuid("company", &self.record_id)?;
        CompanyRow {
            name: self.name,
            code: self.code,
            leader_id: self.leader_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .into_company(id)
    }
}

/// SurrealDB implementation of the Company repository.
#[derive(Clone)]
pub struct SurrealCompanyRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealCompanyRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> CompanyRepository for SurrealCompanyRepository<C> {
    async fn create(&self, input: CreateCompany) -> FirmyResult<Company> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('company', $id) SET \
                 name = $name, code = $code, leader_id = $leader_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("name", input.name))
            .bind(("code", input.code))
            .bind(("leader_id", input.leader_id.map(|l| l.to_string())))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<CompanyRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "company".into(),
            id: id_str,
        })?;

        Ok(row.into_company(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> FirmyResult<Company> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('company', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CompanyRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "company".into(),
            id: id_str,
        })?;

        Ok(row.into_company(id)?)
    }

    async fn update(&self, id: Uuid, input: UpdateCompany) -> FirmyResult<Company> {
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
            "UPDATE type::record('company', $id) SET {}",
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

        let rows: Vec<CompanyRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "company".into(),
            id: id_str,
        })?;

        Ok(row.into_company(id)?)
    }

    async fn delete(&self, id: Uuid) -> FirmyResult<()> {
        // Children first, so nothing is left pointing at a deleted parent.
        // Employees of other companies may sit in these departments; they
        // are unassigned, not deleted.
        self.db
            .query(
                "LET $divisions = (SELECT VALUE meta::id(id) FROM division \
                     WHERE company_id = $id); \
                 LET $projects = (SELECT VALUE meta::id(id) FROM project \
                     WHERE division_id IN $divisions); \
                 LET $departments = (SELECT VALUE meta::id(id) FROM department \
                     WHERE project_id IN $projects); \
                 UPDATE employee SET department_id = NONE \
                     WHERE department_id IN $departments; \
                 DELETE department WHERE project_id IN $projects; \
                 DELETE project WHERE division_id IN $divisions; \
                 DELETE division WHERE company_id = $id; \
                 DELETE employee WHERE company_id = $id; \
                 DELETE type::record('company', $id);",
            )
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> FirmyResult<Vec<Company>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM company \
                 ORDER BY created_at ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CompanyRowWithId> = result.take(0).map_err(DbError::from)?;

        rows.into_iter()
            .map(|row| row.try_into_company())
            .collect::<Result<Vec<_>, DbError>>()
            .map_err(Into::into)
    }
}
