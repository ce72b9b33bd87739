//! Employee domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{self, PERSON_NAME_MAX_LEN, PHONE_MAX_LEN, TITLE_MAX_LEN};
use crate::error::FirmyResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    /// The company of employment.
    pub company_id: Uuid,
    /// `None` while the employee is not assigned to a department.
    pub department_id: Option<Uuid>,
    /// Academic or honorary title (e.g. `Ing.`).
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// `"{first_name} {last_name}"`, as shown for leaders.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub company_id: Uuid,
    pub department_id: Option<Uuid>,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
}

impl CreateEmployee {
    pub fn validate(&self) -> FirmyResult<()> {
        fields::optional("title", self.title.as_deref(), TITLE_MAX_LEN)?;
        fields::required("first_name", &self.first_name, PERSON_NAME_MAX_LEN)?;
        fields::required("last_name", &self.last_name, PERSON_NAME_MAX_LEN)?;
        fields::optional("phone", self.phone.as_deref(), PHONE_MAX_LEN)?;
        fields::email("email", &self.email)
    }
}

/// Fields that can be updated on an existing employee.
///
/// `department_id` can be set or moved but not cleared here; an employee
/// only loses its department when that department is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateEmployee {
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<Uuid>,
}

impl UpdateEmployee {
    pub fn normalize(self) -> Self {
        Self {
            title: fields::non_blank(self.title),
            first_name: fields::non_blank(self.first_name),
            last_name: fields::non_blank(self.last_name),
            phone: fields::non_blank(self.phone),
            email: fields::non_blank(self.email),
            department_id: self.department_id,
        }
    }

    pub fn validate(&self) -> FirmyResult<()> {
        fields::optional("title", self.title.as_deref(), TITLE_MAX_LEN)?;
        fields::optional("first_name", self.first_name.as_deref(), PERSON_NAME_MAX_LEN)?;
        fields::optional("last_name", self.last_name.as_deref(), PERSON_NAME_MAX_LEN)?;
        fields::optional("phone", self.phone.as_deref(), PHONE_MAX_LEN)?;
        match self.email.as_deref() {
            Some(email) => fields::email("email", email),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateEmployee {
        CreateEmployee {
            company_id: Uuid::new_v4(),
            department_id: None,
            title: Some("Ing.".into()),
            first_name: "Jana".into(),
            last_name: "Novakova".into(),
            phone: None,
            email: "jana@example.cz".into(),
        }
    }

    #[test]
    fn valid_employee_passes() {
        assert!(create_input().validate().is_ok());
    }

    #[test]
    fn missing_last_name_is_rejected() {
        let input = CreateEmployee {
            last_name: " ".into(),
            ..create_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn long_phone_is_rejected() {
        let input = CreateEmployee {
            phone: Some("1".repeat(PHONE_MAX_LEN + 1)),
            ..create_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_ignores_blank_fields_before_validation() {
        let update = UpdateEmployee {
            email: Some("   ".into()),
            first_name: Some("Petr".into()),
            ..Default::default()
        }
        .normalize();

        assert_eq!(update.email, None);
        assert_eq!(update.first_name.as_deref(), Some("Petr"));
        assert!(update.validate().is_ok());
    }

    #[test]
    fn update_rejects_malformed_email() {
        let update = UpdateEmployee {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
