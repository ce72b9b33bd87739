//! Outcome of a hierarchy check.

use std::fmt;

/// Result of validating an id chain against the store.
///
/// Expected domain conditions are reported here; store failures are
/// reported separately as `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    Success,
    CompanyNotFound,
    DivisionNotFound,
    DivisionNotInCompany,
    ProjectNotFound,
    ProjectNotInDivision,
    DepartmentNotFound,
    DepartmentNotInProject,
    EmployeeNotInCompany,
    InvalidLeader,
}

impl ValidationResult {
    /// Stable description, returned verbatim as an HTTP body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::CompanyNotFound => "CompanyNotFound",
            Self::DivisionNotFound => "DivisionNotFound",
            Self::DivisionNotInCompany => "DivisionNotInCompany",
            Self::ProjectNotFound => "ProjectNotFound",
            Self::ProjectNotInDivision => "ProjectNotInDivision",
            Self::DepartmentNotFound => "DepartmentNotFound",
            Self::DepartmentNotInProject => "DepartmentNotInProject",
            Self::EmployeeNotInCompany => "EmployeeNotInCompany",
            Self::InvalidLeader => "InvalidLeader",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// `Ok(())` for [`Success`](Self::Success), otherwise the failing
    /// outcome, so callers can chain checks with `?`.
    pub fn into_result(self) -> Result<(), ValidationResult> {
        if self.is_success() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ValidationResult; 10] = [
        ValidationResult::Success,
        ValidationResult::CompanyNotFound,
        ValidationResult::DivisionNotFound,
        ValidationResult::DivisionNotInCompany,
        ValidationResult::ProjectNotFound,
        ValidationResult::ProjectNotInDivision,
        ValidationResult::DepartmentNotFound,
        ValidationResult::DepartmentNotInProject,
        ValidationResult::EmployeeNotInCompany,
        ValidationResult::InvalidLeader,
    ];

    #[test]
    fn description_is_variant_name() {
        for outcome in ALL {
            assert_eq!(outcome.as_str(), format!("{outcome:?}"));
            assert_eq!(outcome.to_string(), outcome.as_str());
        }
    }

    #[test]
    fn descriptions_are_unique() {
        let names: std::collections::HashSet<_> = ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn only_success_is_success() {
        assert!(ValidationResult::Success.is_success());
        assert_eq!(ValidationResult::Success.into_result(), Ok(()));
        for outcome in &ALL[1..] {
            assert!(!outcome.is_success());
            assert_eq!(outcome.into_result(), Err(*outcome));
        }
    }
}
