//! Purchase order error types.

use payables_shared::AppError;
use payables_shared::types::{PurchaseOrderId, VendorId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Purchase order errors.
#[derive(Debug, Error)]
pub enum PurchaseOrderError {
    /// Purchase order not found.
    #[error("Purchase order not found: {0}")]
    NotFound(PurchaseOrderId),

    /// Vendor referenced by the PO does not exist.
    #[error("Vendor not found: {0}")]
    VendorNotFound(VendorId),

    /// Vendor is inactive.
    #[error("Cannot create purchase order for inactive vendor {0}")]
    InactiveVendor(VendorId),

    /// PO has no line items.
    #[error("Purchase order must contain at least one item")]
    EmptyItems,

    /// A line item breaks the quantity/price/description rules.
    #[error("Invalid item at position {index}: {reason}")]
    InvalidItem {
        /// Zero-based item position.
        index: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Line or PO total is larger than any storable amount.
    #[error("Purchase order total exceeds the maximum amount of {max}")]
    AmountOutOfRange {
        /// Largest storable amount.
        max: Decimal,
    },

    /// PO date plus payment terms is not a representable date.
    #[error("Payment due date is out of range")]
    DueDateOutOfRange,

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl PurchaseOrderError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) | Self::VendorNotFound(_) => 404,
            Self::InactiveVendor(_)
            | Self::EmptyItems
            | Self::InvalidItem { .. }
            | Self::AmountOutOfRange { .. }
            | Self::DueDateOutOfRange => 400,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "PURCHASE_ORDER_NOT_FOUND",
            Self::VendorNotFound(_) => "VENDOR_NOT_FOUND",
            Self::InactiveVendor(_) => "INACTIVE_VENDOR",
            Self::EmptyItems => "EMPTY_ITEMS",
            Self::InvalidItem { .. } => "INVALID_ITEM",
            Self::AmountOutOfRange { .. } => "AMOUNT_OUT_OF_RANGE",
            Self::DueDateOutOfRange => "DUE_DATE_OUT_OF_RANGE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl From<PurchaseOrderError> for AppError {
    fn from(err: PurchaseOrderError) -> Self {
        match err {
            PurchaseOrderError::NotFound(_) | PurchaseOrderError::VendorNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            PurchaseOrderError::InactiveVendor(_)
            | PurchaseOrderError::EmptyItems
            | PurchaseOrderError::InvalidItem { .. }
            | PurchaseOrderError::AmountOutOfRange { .. }
            | PurchaseOrderError::DueDateOutOfRange => Self::Validation(err.to_string()),
            PurchaseOrderError::Database(msg) => Self::Database(msg),
        }
    }
}
