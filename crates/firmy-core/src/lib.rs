//! Firmy Core — domain models, repository traits and error types shared
//! by every other crate in the workspace.

pub mod error;
pub mod models;
pub mod repository;
