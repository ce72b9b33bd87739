//! Division domain model.
//!
//! Divisions group projects under a company.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{self, CODE_MAX_LEN, NAME_MAX_LEN};
use crate::error::FirmyResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    pub id: Uuid,
    /// The company this division belongs to. Fixed at creation.
    pub company_id: Uuid,
    pub name: String,
    pub code: String,
    pub leader_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDivision {
    pub company_id: Uuid,
    pub name: String,
    pub code: String,
    pub leader_id: Option<Uuid>,
}

impl CreateDivision {
    pub fn validate(&self) -> FirmyResult<()> {
        fields::required("name", &self.name, NAME_MAX_LEN)?;
        fields::required("code", &self.code, CODE_MAX_LEN)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateDivision {
    pub name: Option<String>,
    pub code: Option<String>,
    pub leader_id: Option<Uuid>,
}

impl UpdateDivision {
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
