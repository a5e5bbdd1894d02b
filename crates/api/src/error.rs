//! JSON error envelope.
//!
//! Every failure leaves the API as `{"error": CODE, "message": text}` with
//! the status taken from `AppError`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use payables_core::payment::PaymentError;
use payables_core::purchase_order::PurchaseOrderError;
use payables_core::vendor::VendorError;
use payables_shared::AppError;
use sea_orm::DbErr;
use serde_json::json;
use tracing::error;

/// Handler error. Wraps `AppError` so it can be returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if self.0.is_server_error() {
            error!(error = %self.0, "request failed");
            "An internal error occurred".to_string()
        } else {
            self.0.to_string()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<VendorError> for ApiError {
    fn from(err: VendorError) -> Self {
        Self(err.into())
    }
}

impl From<PurchaseOrderError> for ApiError {
    fn from(err: PurchaseOrderError) -> Self {
        Self(err.into())
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        Self(err.into())
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}
