//! Firmy Database — SurrealDB connection management and repository
//! implementations for the company hierarchy.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization ([`init_schema`])
//! - Error types ([`DbError`])
//! - Repository implementations of the `firmy-core` traits ([`repository`])

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{init_schema, schema_ddl};
