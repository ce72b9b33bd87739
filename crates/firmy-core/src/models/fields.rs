//! Field-level rules shared by the create/update inputs.

use crate::error::{FirmyError, FirmyResult};

pub const NAME_MAX_LEN: usize = 200;
pub const CODE_MAX_LEN: usize = 50;
pub const TITLE_MAX_LEN: usize = 50;
pub const PERSON_NAME_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 30;
pub const EMAIL_MAX_LEN: usize = 200;

/// Drops a value that is empty or whitespace only.
///
/// Partial updates treat blank strings as "leave unchanged".
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn required(field: &str, value: &str, max: usize) -> FirmyResult<()> {
    if value.trim().is_empty() {
        return Err(FirmyError::validation(format!("{field} is required")));
    }
    max_len(field, value, max)
}

pub(crate) fn optional(field: &str, value: Option<&str>, max: usize) -> FirmyResult<()> {
    match value {
        Some(v) => max_len(field, v, max),
        None => Ok(()),
    }
}

pub(crate) fn max_len(field: &str, value: &str, max: usize) -> FirmyResult<()> {
    if value.chars().count() > max {
        return Err(FirmyError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

pub(crate) fn email(field: &str, value: &str) -> FirmyResult<()> {
    max_len(field, value, EMAIL_MAX_LEN)?;

    let invalid = || FirmyError::validation(format!("{field} is not a valid email address"));
    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_dropped() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("x".into())), Some("x".into()));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn required_rejects_blank_and_long_values() {
        assert!(required("name", "Acme", NAME_MAX_LEN).is_ok());
        assert!(required("name", "   ", NAME_MAX_LEN).is_err());
        assert!(required("code", &"x".repeat(CODE_MAX_LEN + 1), CODE_MAX_LEN).is_err());
        assert!(required("code", &"x".repeat(CODE_MAX_LEN), CODE_MAX_LEN).is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(email("email", "jan.novak@example.cz").is_ok());
        assert!(email("email", "no-at-sign").is_err());
        assert!(email("email", "@example.com").is_err());
        assert!(email("email", "a@").is_err());
        assert!(email("email", "a@b@c").is_err());
        assert!(email("email", "a b@example.com").is_err());
        assert!(email("email", "a@.example.com").is_err());
    }

    #[test]
    fn error_message_names_the_field() {
        let err = required("first_name", "", PERSON_NAME_MAX_LEN).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: first_name is required");
    }
}
