//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth_middleware};

pub mod commissions;
pub mod health;
pub mod reports;

/// Creates the API router with public and protected routes.
pub fn api_routes() -> Router<AppState> {
    // Protected routes that require a bearer token
    let protected_routes = Router::new()
        .merge(reports::routes())
        .merge(commissions::routes())
        .layer(middleware::from_fn(auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(protected_routes)
}
