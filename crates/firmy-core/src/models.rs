//! Domain models for Firmy.
//!
//! The hierarchy is Company > Division > Project > Department. Employees
//! belong to a company and optionally to one of its departments.

pub mod company;
pub mod department;
pub mod division;
pub mod employee;
pub mod fields;
pub mod project;
