//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for vendors, purchase orders, payments and analytics
//! - Bearer-token authentication middleware
//! - Validated JSON extraction
//! - The JSON error envelope

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use axum::Router;
use payables_shared::JwtService;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for bearer-token validation.
    pub jwt_service: Arc<JwtService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
