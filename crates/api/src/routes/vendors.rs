//! Vendor directory routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use payables_core::vendor::{
    CreateVendorInput, PaymentTerms, UpdateVendorInput, Vendor, VendorStatus, VendorWithSummary,
};
use payables_db::VendorRepository;
use payables_shared::types::VendorId;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::{AppState, error::ApiError, extractors::ValidatedJson, middleware::AuthUser};

/// Creates the vendor routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/vendors", get(list_vendors).post(create_vendor))
        .route("/vendors/{id}", get(get_vendor).put(update_vendor))
}

/// Request body for creating a vendor.
///
/// `paymentTerms` outside {7, 15, 30, 45, 60} fails deserialization.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorRequest {
    /// Vendor name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Contact person.
    pub contact_person: Option<String>,
    /// Email address.
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Payment terms in days.
    pub payment_terms: PaymentTerms,
}

impl From<CreateVendorRequest> for CreateVendorInput {
    fn from(req: CreateVendorRequest) -> Self {
        Self {
            name: req.name,
            contact_person: req.contact_person,
            email: req.email,
            phone: req.phone,
            payment_terms: req.payment_terms,
        }
    }
}

/// Request body for a partial vendor update.
///
/// An absent field is left untouched; `null` clears `contactPerson` or `phone`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendorRequest {
    /// New name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New contact person.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub contact_person: Option<Option<String>>,
    /// New email address.
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    /// New phone number.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub phone: Option<Option<String>>,
    /// New payment terms.
    pub payment_terms: Option<PaymentTerms>,
    /// New status.
    pub status: Option<VendorStatus>,
}

impl From<UpdateVendorRequest> for UpdateVendorInput {
    fn from(req: UpdateVendorRequest) -> Self {
        Self {
            name: req.name,
            contact_person: req.contact_person,
            email: req.email,
            phone: req.phone,
            payment_terms: req.payment_terms,
            status: req.status,
        }
    }
}

async fn create_vendor(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateVendorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VendorRepository::new((*state.db).clone());
    let vendor = repo.create(payload.into()).await?;

    info!(vendor_id = %vendor.id, actor = auth.subject(), "Vendor created via API");
    Ok((StatusCode::CREATED, Json(vendor)))
}

async fn list_vendors(State(state): State<AppState>) -> Result<Json<Vec<Vendor>>, ApiError> {
    let repo = VendorRepository::new((*state.db).clone());
    Ok(Json(repo.list().await?))
}

async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<VendorId>,
) -> Result<Json<VendorWithSummary>, ApiError> {
    let repo = VendorRepository::new((*state.db).clone());
    Ok(Json(repo.get(id).await?))
}

async fn update_vendor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<VendorId>,
    ValidatedJson(payload): ValidatedJson<UpdateVendorRequest>,
) -> Result<Json<Vendor>, ApiError> {
    let repo = VendorRepository::new((*state.db).clone());
    let vendor = repo.update(id, payload.into()).await?;

    info!(vendor_id = %vendor.id, actor = auth.subject(), "Vendor updated via API");
    Ok(Json(vendor))
}
