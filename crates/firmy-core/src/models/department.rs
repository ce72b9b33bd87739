//! Department domain model.
//!
//! Departments are the leaves of the hierarchy; employees may be assigned to one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{self, CODE_MAX_LEN, NAME_MAX_LEN};
use crate::error::FirmyResult;

/// A department inside a project.
///
/// Deleting a department does not delete its employees; their
/// `department_id` is cleared instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    /// The project this department belongs to. Fixed at creation.
    pub project_id: Uuid,
    pub name: String,
    pub code: String,
    pub leader_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    pub project_id: Uuid,
    pub name: String,
    pub code: String,
    pub leader_id: Option<Uuid>,
}

impl CreateDepartment {
    pub fn validate(&self) -> FirmyResult<()> {
        fields::required("name", &self.name, NAME_MAX_LEN)?;
        fields::required("code", &self.code, CODE_MAX_LEN)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateDepartment {
    pub name: Option<String>,
    pub code: Option<String>,
    pub leader_id: Option<Uuid>,
}

impl UpdateDepartment {
    pub fn normalize(self) -> Self {
        Self {
            name: fields::non_blank(self.name),
            code: fields::non_blank(self.code),
            leader_id: self.leader_id,
        }
    }

    pub fn validate(&self) -> FirmyResult<()> {
        fields::optional("name", self.name.as_deref(), NAME_MAX_LEN)?;
        fields::optional("code", self.code.as_deref(), CODE_MAX_LEN)
    }
}
