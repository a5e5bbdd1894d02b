//! Purchase order ledger routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use chrono::NaiveDate;
use payables_core::money::fits_money_column;
use payables_core::purchase_order::{
    CreatePurchaseOrderInput, PoItem, PoStatus, PurchaseOrder, PurchaseOrderDetail,
    PurchaseOrderFilter, PurchaseOrderListItem,
};
use payables_db::PurchaseOrderRepository;
use payables_shared::{
    AppError,
    types::{PurchaseOrderId, VendorId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::{Validate, ValidationError};

use crate::{AppState, error::ApiError, extractors::ValidatedJson, middleware::AuthUser};

/// Creates the purchase order routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/purchase-orders",
            get(list_purchase_orders).post(create_purchase_order),
        )
        .route("/purchase-orders/{id}", get(get_purchase_order))
        .route("/purchase-orders/{id}/status", patch(update_status))
}

fn storable_unit_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("non_negative")
            .with_message("unitPrice must not be negative".into()));
    }
    if !fits_money_column(*value) {
        return Err(ValidationError::new("money")
            .with_message("unitPrice must have at most 4 decimal places and fit 15 digits".into()));
    }
    Ok(())
}

/// One line item in a create request.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PoItemRequest {
    /// Item description.
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    /// Quantity ordered.
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
    /// Price per unit.
    #[validate(custom(function = "storable_unit_price"))]
    pub unit_price: Decimal,
}

/// Request body for creating a purchase order.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseOrderRequest {
    /// Vendor to issue the PO to.
    pub vendor_id: VendorId,
    /// PO date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Line items, at least one.
    #[validate(length(min = 1, message = "items must not be empty"), nested)]
    pub items: Vec<PoItemRequest>,
}

impl From<CreatePurchaseOrderRequest> for CreatePurchaseOrderInput {
    fn from(req: CreatePurchaseOrderRequest) -> Self {
        Self {
            vendor_id: req.vendor_id,
            date: req.date,
            items: req
                .items
                .into_iter()
                .map(|item| PoItem {
                    description: item.description,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
        }
    }
}

/// Request body for the status override.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    /// New status.
    pub status: PoStatus,
}

async fn create_purchase_order(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreatePurchaseOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = PurchaseOrderRepository::new((*state.db).clone());
    let po = repo.create(payload.into()).await?;

    info!(
        po_id = %po.id,
        po_number = %po.po_number,
        actor = auth.subject(),
        "Purchase order created via API"
    );
    Ok((StatusCode::CREATED, Json(po)))
}

async fn list_purchase_orders(
    State(state): State<AppState>,
    filter: Result<Query<PurchaseOrderFilter>, QueryRejection>,
) -> Result<Json<Vec<PurchaseOrderListItem>>, ApiError> {
    let Query(filter) =
        filter.map_err(|rejection| ApiError(AppError::Validation(rejection.body_text())))?;

    let repo = PurchaseOrderRepository::new((*state.db).clone());
    Ok(Json(repo.list(filter).await?))
}

async fn get_purchase_order(
    State(state): State<AppState>,
    Path(id): Path<PurchaseOrderId>,
) -> Result<Json<PurchaseOrderDetail>, ApiError> {
    let repo = PurchaseOrderRepository::new((*state.db).clone());
    Ok(Json(repo.get(id).await?))
}

async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<PurchaseOrderId>,
    ValidatedJson(payload): ValidatedJson<UpdateStatusRequest>,
) -> Result<Json<PurchaseOrder>, ApiError> {
    let repo = PurchaseOrderRepository::new((*state.db).clone());
    let po = repo.update_status(id, payload.status).await?;

    info!(po_id = %po.id, status = %po.status, actor = auth.subject(), "PO status overridden via API");
    Ok(Json(po))
}
