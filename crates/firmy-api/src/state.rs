//! Shared handler state.

use std::sync::Arc;

use firmy_core::repository::Repositories;
use firmy_validation::EntityValidator;

/// Repositories plus the validator guarding them.
pub struct AppState<R, V> {
    pub repos: R,
    pub validator: Arc<V>,
}

impl<R: Repositories, V: EntityValidator> AppState<R, V> {
    pub fn new(repos: R, validator: V) -> Self {
        Self {
            repos,
            validator: Arc::new(validator),
        }
    }
}

impl<R: Clone, V> Clone for AppState<R, V> {
    fn clone(&self) -> Self {
        Self {
            repos: self.repos.clone(),
            validator: Arc::clone(&self.validator),
        }
    }
}
