//! Project domain model.
//!
//! Projects live inside a division and group departments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{self, CODE_MAX_LEN, NAME_MAX_LEN};
use crate::error::FirmyResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    /// The division this project belongs to. Fixed at creation.
    pub division_id: Uuid,
    pub name: String,
    pub code: String,
    /// Must be an employee of the company owning the division.
    pub leader_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub division_id: Uuid,
    pub name: String,
    pub code: String,
    pub leader_id: Option<Uuid>,
}

impl CreateProject {
    pub fn validate(&self) -> FirmyResult<()> {
        fields::required("name", &self.name, NAME_MAX_LEN)?;
        fields::required("code", &self.code, CODE_MAX_LEN)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub code: Option<String>,
    pub leader_id: Option<Uuid>,
}

impl UpdateProject {
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
