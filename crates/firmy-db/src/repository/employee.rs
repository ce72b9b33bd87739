//! SurrealDB implementation of [`EmployeeRepository`].
//!
//! Every query is scoped by `company_id`: a lookup of an employee through
//! the wrong company behaves exactly like a lookup of a missing one.

use chrono::{DateTime, Utc};
use firmy_core::error::FirmyResult;
use firmy_core::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use firmy_core::repository::EmployeeRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::{parse_optional_uuid, parse_uuid};
use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct EmployeeRow {
    company_id: String,
    department_id: Option<String>,
    title: Option<String>,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EmployeeRow {
    fn into_employee(self, id: Uuid) -> Result<Employee, DbError> {
        Ok(Employee {
            id,
            company_id: parse_uuid("company", &self.company_id)?,
            department_id: parse_optional_uuid("department", self.department_id.as_deref())?,
            title: self.title,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct EmployeeRowWithId {
    record_id: String,
    company_id: String,
    department_id: Option<String>,
    title: Option<String>,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EmployeeRowWithId {
    fn try_into_employee(self) -> Result<Employee, DbError> {
        let id = parse_uuid("employee", &self.record_id)?;
        EmployeeRow {
            company_id: self.company_id,
            department_id: self.department_id,
            title: self.title,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .into_employee(id)
    }
}

/// SurrealDB implementation of the Employee repository.
#[derive(Clone)]
pub struct SurrealEmployeeRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealEmployeeRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    async fn list_where(
        &self,
        company_id: Uuid,
        department_id: Option<Uuid>,
    ) -> FirmyResult<Vec<Employee>> {
        let filter = if department_id.is_some() {
            "WHERE company_id = $company_id AND department_id = $department_id"
        } else {
            "WHERE company_id = $company_id"
        };
        let query = format!(
            "SELECT meta::id(id) AS record_id, * FROM employee {filter} \
             ORDER BY last_name ASC, first_name ASC"
        );

        let mut builder = self
            .db
            .query(query)
            .bind(("company_id", company_id.to_string()));
        if let Some(department_id) = department_id {
            builder = builder.bind(("department_id", department_id.to_string()));
        }

        let mut result = builder.await.map_err(DbError::from)?;
        let rows: Vec<EmployeeRowWithId> = result.take(0).map_err(DbError::from)?;

        rows.into_iter()
            .map(|row| row.try_into_employee())
            .collect::<Result<Vec<_>, DbError>>()
            .map_err(Into::into)
    }
}

impl<C: Connection> EmployeeRepository for SurrealEmployeeRepository<C> {
    async fn create(&self, input: CreateEmployee) -> FirmyResult<Employee> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('employee', $id) SET \
                 company_id = $company_id, \
                 department_id = $department_id, \
                 title = $title, \
                 first_name = $first_name, last_name = $last_name, \
                 phone = $phone, email = $email",
            )
            .bind(("id", id_str.clone()))
            .bind(("company_id", input.company_id.to_string()))
            .bind(("department_id", input.department_id.map(|d| d.to_string())))
            .bind(("title", input.title))
            .bind(("first_name", input.first_name))
            .bind(("last_name", input.last_name))
            .bind(("phone", input.phone))
            .bind(("email", input.email))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<EmployeeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "employee".into(),
            id: id_str,
        })?;

        Ok(row.into_employee(id)?)
    }

    async fn get_by_id(&self, company_id: Uuid, id: Uuid) -> FirmyResult<Employee> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('employee', $id) \
                 WHERE company_id = $company_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("company_id", company_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EmployeeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "employee".into(),
            id: id_str,
        })?;

        Ok(row.into_employee(id)?)
    }

    async fn update(
        &self,
        company_id: Uuid,
        id: Uuid,
        input: UpdateEmployee,
    ) -> FirmyResult<Employee> {
        let id_str = id.to_string();

        let mut sets = Vec::new();
        if input.title.is_some() {
            sets.push("title = $title");
        }
        if input.first_name.is_some() {
            sets.push("first_name = $first_name");
        }
        if input.last_name.is_some() {
            sets.push("last_name = $last_name");
        }
        if input.phone.is_some() {
            sets.push("phone = $phone");
        }
        if input.email.is_some() {
            sets.push("email = $email");
        }
        if input.department_id.is_some() {
            sets.push("department_id = $department_id");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('employee', $id) SET {} \
             WHERE company_id = $company_id",
            sets.join(", ")
        );

        let mut builder = self
            .db
            .query(&query)
            .bind(("id", id_str.clone()))
            .bind(("company_id", company_id.to_string()));

        if let Some(title) = input.title {
            builder = builder.bind(("title", title));
        }
        if let Some(first_name) = input.first_name {
            builder = builder.bind(("first_name", first_name));
        }
        if let Some(last_name) = input.last_name {
            builder = builder.bind(("last_name", last_name));
        }
        if let Some(phone) = input.phone {
            builder = builder.bind(("phone", phone));
        }
        if let Some(email) = input.email {
            builder = builder.bind(("email", email));
        }
        if let Some(department_id) = input.department_id {
            builder = builder.bind(("department_id", department_id.to_string()));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<EmployeeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "employee".into(),
            id: id_str,
        })?;

        Ok(row.into_employee(id)?)
    }

    async fn delete(&self, company_id: Uuid, id: Uuid) -> FirmyResult<()> {
        // Scope check first: leader references are only cleared for an
        // employee that actually works for this company.
        self.get_by_id(company_id, id).await?;

        self.db
            .query(
                "UPDATE company SET leader_id = NONE WHERE leader_id = $id; \
                 UPDATE division SET leader_id = NONE WHERE leader_id = $id; \
                 UPDATE project SET leader_id = NONE WHERE leader_id = $id; \
                 UPDATE department SET leader_id = NONE WHERE leader_id = $id; \
                 DELETE type::record('employee', $id) \
                     WHERE company_id = $company_id;",
            )
            .bind(("id", id.to_string()))
            .bind(("company_id", company_id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list(&self, company_id: Uuid) -> FirmyResult<Vec<Employee>> {
        self.list_where(company_id, None).await
    }

    async fn list_by_department(
        &self,
        company_id: Uuid,
        department_id: Uuid,
    ) -> FirmyResult<Vec<Employee>> {
        self.list_where(company_id, Some(department_id)).await
    }
}
