//! Firmy API — REST routes over the organizational hierarchy.
//!
//! Every route under a company checks its id chain with the
//! [`EntityValidator`](firmy_validation::EntityValidator) before touching
//! the store. Chain failures answer 404 with the outcome name; an invalid
//! leader answers 400.

pub mod dto;
pub mod error;
mod routes;
pub mod state;

use axum::Router;
use firmy_core::repository::Repositories;
use firmy_validation::EntityValidator;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Build the full router, with every route nested under `/api`.
pub fn router<R, V>(state: AppState<R, V>) -> Router
where
    R: Repositories,
    V: EntityValidator + 'static,
{
    Router::new()
        .nest("/api", routes::api())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
