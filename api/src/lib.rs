pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod language;
pub mod observability;
pub mod routes;
pub mod state;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: routes, fallback, and the middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::category_routes())
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            language::language_middleware,
        ))
        .layer(middleware::from_fn(observability::request_logger))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
