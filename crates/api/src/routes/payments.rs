//! Payment recorder routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use payables_core::money::fits_money_column;
use payables_core::payment::{PaymentMethod, PaymentWithPurchaseOrder, RecordPaymentInput};
use payables_db::PaymentRepository;
use payables_shared::types::{PaymentId, PurchaseOrderId};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use validator::{Validate, ValidationError};

use crate::{AppState, error::ApiError, extractors::ValidatedJson, middleware::AuthUser};

/// Creates the payment routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments", get(list_payments).post(record_payment))
        .route("/payments/{id}", get(get_payment))
}

const MIN_PAYMENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

fn payable_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value < MIN_PAYMENT {
        return Err(ValidationError::new("min_amount")
            .with_message("amount must be at least 0.01".into()));
    }
    if !fits_money_column(*value) {
        return Err(ValidationError::new("money")
            .with_message("amount must have at most 4 decimal places and fit 15 digits".into()));
    }
    Ok(())
}

/// Request body for recording a payment.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    /// PO being paid.
    pub po_id: PurchaseOrderId,
    /// Amount paid.
    #[validate(custom(function = "payable_amount"))]
    pub amount: Decimal,
    /// How it was paid.
    pub payment_method: PaymentMethod,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl From<RecordPaymentRequest> for RecordPaymentInput {
    fn from(req: RecordPaymentRequest) -> Self {
        Self {
            po_id: req.po_id,
            amount: req.amount,
            payment_method: req.payment_method,
            notes: req.notes,
        }
    }
}

async fn record_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<RecordPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = PaymentRepository::new((*state.db).clone());
    let payment = repo.record(payload.into()).await?;

    info!(
        payment_id = %payment.id,
        payment_ref = %payment.payment_ref,
        actor = auth.subject(),
        "Payment recorded via API"
    );
    Ok((StatusCode::CREATED, Json(payment)))
}

async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentWithPurchaseOrder>>, ApiError> {
    let repo = PaymentRepository::new((*state.db).clone());
    Ok(Json(repo.list().await?))
}

async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
) -> Result<Json<PaymentWithPurchaseOrder>, ApiError> {
    let repo = PaymentRepository::new((*state.db).clone());
    Ok(Json(repo.get(id).await?))
}
