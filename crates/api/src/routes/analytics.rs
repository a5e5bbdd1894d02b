//! Reconciliation and analytics routes.

use axum::{Json, Router, extract::State, routing::get};
use payables_core::analytics::{PaymentAging, VendorOutstanding};
use payables_db::AnalyticsRepository;

use crate::{AppState, error::ApiError};

/// Creates the analytics routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/vendor-outstanding", get(vendor_outstanding))
        .route("/analytics/payment-aging", get(payment_aging))
}

async fn vendor_outstanding(
    State(state): State<AppState>,
) -> Result<Json<Vec<VendorOutstanding>>, ApiError> {
    let repo = AnalyticsRepository::new((*state.db).clone());
    Ok(Json(repo.vendor_outstanding().await?))
}

async fn payment_aging(State(state): State<AppState>) -> Result<Json<PaymentAging>, ApiError> {
    let repo = AnalyticsRepository::new((*state.db).clone());
    Ok(Json(repo.payment_aging().await?))
}
