//! Company domain model.
//!
//! Companies are the root of the hierarchy. They own divisions directly
//! and employees through the employment relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{self, CODE_MAX_LEN, NAME_MAX_LEN};
use crate::error::FirmyResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    /// Short business code (e.g. `ACME`).
    pub code: String,
    /// Employee of this company acting as its leader.
    pub leader_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub code: String,
    pub leader_id: Option<Uuid>,
}

impl CreateCompany {
    pub fn validate(&self) -> FirmyResult<()> {
        fields::required("name", &self.name, NAME_MAX_LEN)?;
        fields::required("code", &self.code, CODE_MAX_LEN)
    }
}

/// Fields that can be updated on an existing company.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub code: Option<String>,
    pub leader_id: Option<Uuid>,
}

impl UpdateCompany {
    /// Blank strings mean "unchanged".
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
