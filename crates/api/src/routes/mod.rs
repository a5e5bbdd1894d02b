//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod analytics;
pub mod health;
pub mod payments;
pub mod purchase_orders;
pub mod vendors;


/// Creates the API router. Everything except `/health` sits behind the bearer gate.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(vendors::routes())
        .merge(purchase_orders::routes())
        .merge(payments::routes())
        .merge(analytics::routes())
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(protected_routes)
}
