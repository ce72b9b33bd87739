//! Firmy Validation — checks that a chain of ids forms a consistent path
//! through the Company > Division > Project > Department hierarchy, and
//! that a leader belongs to the company.

pub mod outcome;
pub mod validator;

pub use outcome::ValidationResult;
pub use validator::{EntityValidator, RepositoryEntityValidator};
